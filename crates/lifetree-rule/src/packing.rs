//! The packed-key contract shared with table consumers.
//!
//! The nine input states (center, then the clockwise ring) are packed into
//! one integer. Each state gets `ceil(log2(n_states)) + 1` bits and input
//! `i` lands at bit offset `POSITION_SHIFTS[i] * bits`. The shift order is
//! fixed and must not be changed: consumers decode keys with the same
//! table.

use lifetree_core::State;

/// Slot index of each of the nine inputs.
pub const POSITION_SHIFTS: [u32; 9] = [4, 7, 6, 3, 0, 1, 2, 5, 8];

/// Number of packed inputs.
pub const INPUTS: usize = 9;

/// Integer key for one neighborhood configuration.
pub type PackedKey = u128;

/// Packing parameters for a given state count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Packing {
    n_states: u32,
    bits: u32,
}

impl Packing {
    /// Packing for `n_states` states. `n_states` must be in `2..=256`.
    pub fn new(n_states: u32) -> Self {
        debug_assert!((2..=256).contains(&n_states));
        let n = n_states.max(2);
        let ceil_log2 = u32::BITS - (n - 1).leading_zeros();
        Self {
            n_states,
            bits: ceil_log2 + 1,
        }
    }

    /// The state count this packing was built for.
    pub fn n_states(&self) -> u32 {
        self.n_states
    }

    /// Bits allotted to each input.
    pub fn bits_per_state(&self) -> u32 {
        self.bits
    }

    /// Bit offset of input `position` (0 = center, 1..=8 = ring).
    pub fn shift(&self, position: usize) -> u32 {
        POSITION_SHIFTS[position] * self.bits
    }

    /// Pack nine input states into a key.
    pub fn pack(&self, inputs: &[State; INPUTS]) -> PackedKey {
        inputs
            .iter()
            .enumerate()
            .fold(0, |key, (i, &s)| key | (PackedKey::from(s) << self.shift(i)))
    }

    /// Recover the nine input states from a key.
    pub fn unpack(&self, key: PackedKey) -> [State; INPUTS] {
        let mask: PackedKey = (1 << self.bits) - 1;
        std::array::from_fn(|i| ((key >> self.shift(i)) & mask) as State)
    }

    /// Number of distinct configurations, `n_states^9`.
    pub fn configurations(&self) -> u128 {
        u128::from(self.n_states).pow(INPUTS as u32)
    }

    /// Every configuration, in mixed-radix order with the center most
    /// significant and ring position 8 varying fastest.
    pub fn all_inputs(&self) -> Configurations {
        Configurations {
            n_states: self.n_states,
            next: Some([0; INPUTS]),
        }
    }
}

/// Iterator over every input configuration of a [`Packing`].
#[derive(Clone, Debug)]
pub struct Configurations {
    n_states: u32,
    next: Option<[State; INPUTS]>,
}

impl Iterator for Configurations {
    type Item = [State; INPUTS];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut step = current;
        let mut carried = true;
        for digit in step.iter_mut().rev() {
            *digit += 1;
            if *digit < self.n_states {
                carried = false;
                break;
            }
            *digit = 0;
        }
        self.next = (!carried).then_some(step);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bit_widths() {
        assert_eq!(Packing::new(2).bits_per_state(), 2);
        assert_eq!(Packing::new(3).bits_per_state(), 3);
        assert_eq!(Packing::new(4).bits_per_state(), 3);
        assert_eq!(Packing::new(5).bits_per_state(), 4);
        assert_eq!(Packing::new(256).bits_per_state(), 9);
    }

    #[test]
    fn shifts_follow_fixed_order() {
        let p = Packing::new(2);
        let shifts: Vec<u32> = (0..INPUTS).map(|i| p.shift(i)).collect();
        assert_eq!(shifts, vec![8, 14, 12, 6, 0, 2, 4, 10, 16]);
    }

    #[test]
    fn center_only_key() {
        let p = Packing::new(2);
        assert_eq!(p.pack(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), 1 << 8);
        assert_eq!(p.pack(&[0, 0, 0, 0, 1, 0, 0, 0, 0]), 1);
        assert_eq!(p.pack(&[0; INPUTS]), 0);
    }

    #[test]
    fn widest_key_fits() {
        let p = Packing::new(256);
        let key = p.pack(&[255; INPUTS]);
        assert!(key < 1 << 81);
        assert_eq!(p.unpack(key), [255; INPUTS]);
    }

    #[test]
    fn configurations_count() {
        let p = Packing::new(2);
        assert_eq!(p.configurations(), 512);
        assert_eq!(p.all_inputs().count(), 512);
        assert_eq!(Packing::new(3).all_inputs().count(), 19_683);
    }

    #[test]
    fn configurations_order() {
        let mut it = Packing::new(2).all_inputs();
        assert_eq!(it.next(), Some([0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(it.next(), Some([0, 0, 0, 0, 0, 0, 0, 0, 1]));
        assert_eq!(it.next(), Some([0, 0, 0, 0, 0, 0, 0, 1, 0]));
        assert_eq!(it.last(), Some([1; INPUTS]));
    }

    proptest! {
        #[test]
        fn pack_is_injective_and_reversible(
            n in 2u32..=256,
            raw in proptest::array::uniform9(any::<u32>()),
        ) {
            let p = Packing::new(n);
            let inputs = raw.map(|s| s % n);
            prop_assert_eq!(p.unpack(p.pack(&inputs)), inputs);
        }
    }
}
