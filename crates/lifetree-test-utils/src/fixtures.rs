//! Sample rule tables and named patterns.
//!
//! - [`LIFE_HISTORY`]: a 7-state `rotate8` table with 21 variables and
//!   `@COLORS`/`@ICONS` sections. Heavy to compile; used for parsing.
//! - [`CONWAY_LIFE`]: B3/S23 as a `permute` table meant to be compiled
//!   with identity seeding.
//! - [`ROTATE8_BIRTH`]: a single `rotate8` birth clause with an unused
//!   variable.

use lifetree_core::{Coord, SparseGrid};

pub const LIFE_HISTORY: &str = r#"@RULE LifeHistory

A variant of HistoricalLife with two extra ON states
and two extra OFF states, for annotation purposes:

state 0:  OFF
state 1:  ON
state 2:  history/envelope (state=2 if cell was ever ON)
state 3:  marked ON (may change to OFF but will always remain marked)
state 4:  marked OFF (may change to ON but will always remain marked)
state 5:  start ON (becomes a normal marked OFF cell when it dies)
state 6:  boundary OFF (can never turn on -- can keep subpatterns in a
          stamp collection from interfering with each other)

@TABLE

n_states:7
neighborhood:Moore
symmetries:rotate8

var a={0,2,4,6}
var b={0,2,4,6}
var c={0,2,4,6}
var d={0,2,4,6}
var e={0,2,4,6}
var f={0,2,4,6}
var g={3,5}
var h={0,1,2}
var i={0,1,2,3,4,5,6}
var j={0,1,2,3,4,5,6}
var k={0,1,2,3,4,5,6}
var l={0,1,2,3,4,5,6}
var m={0,1,2,3,4,5,6}
var n={0,1,2,3,4,5,6}
var o={0,1,2,3,4,5,6}
var p={0,1,2,3,4,5,6}
var q={1,3,5}
var R={1,3,5}
var S={1,3,5}
var T={1,3,5}
var u={3,4,5}

# boundary cell always stays a boundary cell
6,i,j,k,l,m,n,o,p,6

# anything else that touches a boundary cell dies
# (using 'u' instead of 'g' below lets gliders survive as blocks)
g,6,i,j,k,l,m,n,o,4
1,6,i,j,k,l,m,n,o,2

# marked 3-neighbour birth
4,R,S,T,a,b,c,d,e,3
4,R,S,a,T,b,c,d,e,3
4,R,S,a,b,T,c,d,e,3
4,R,S,a,b,c,T,d,e,3
4,R,S,a,b,c,d,T,e,3
4,R,a,S,b,T,c,d,e,3
4,R,a,S,b,c,T,d,e,3

# marked 3-neighbour survival
g,R,S,T,a,b,c,d,e,g
g,R,S,a,T,b,c,d,e,g
g,R,S,a,b,T,c,d,e,g
g,R,S,a,b,c,T,d,e,g
g,R,S,a,b,c,d,T,e,g
g,R,a,S,b,T,c,d,e,g
g,R,a,S,b,c,T,d,e,g

# normal 3-neighbour birth
h,R,S,T,a,b,c,d,e,1
h,R,S,a,T,b,c,d,e,1
h,R,S,a,b,T,c,d,e,1
h,R,S,a,b,c,T,d,e,1
h,R,S,a,b,c,d,T,e,1
h,R,a,S,b,T,c,d,e,1
h,R,a,S,b,c,T,d,e,1

# 2-neighbour survival
q,R,S,a,b,c,d,e,f,q
q,R,a,S,b,c,d,e,f,q
q,R,a,b,S,c,d,e,f,q
q,R,a,b,c,S,d,e,f,q

# ON states 3 and 5 go to history state 4 if they don't survive
g,i,j,k,l,m,n,o,p,4

# Otherwise ON states die and become the history state
q,i,j,k,l,m,n,o,p,2

@COLORS

1    0  255    0
2    0    0  128
3  216  255  216
4  255    0    0
5  255  255    0
6   96   96   96

@ICONS

XPM
/* width height num_colors chars_per_pixel */
"7 7 2 1"
/* colors */
". c #000000"
"B c #FFFFFF"
/* icon for state 1 */
"......."
".BBBBB."
".BBBBB."
".BBBBB."
".BBBBB."
".BBBBB."
"......."
"#;

/// Number of transition clauses in [`LIFE_HISTORY`].
pub const LIFE_HISTORY_CLAUSES: usize = 30;

/// Number of variables in [`LIFE_HISTORY`].
pub const LIFE_HISTORY_VARIABLES: usize = 21;

pub const CONWAY_LIFE: &str = "\
@RULE Life
Conway's Game of Life, B3/S23. Survival is the identity default.

@TABLE
n_states:2
neighborhood:Moore
symmetries:permute

var a={0,1}

# isolation
1,0,0,0,0,0,0,0,0,0
1,1,0,0,0,0,0,0,0,0
# overcrowding
1,1,1,1,1,0,0,0,0,0
1,1,1,1,1,1,0,0,0,0
1,1,1,1,1,1,1,0,0,0
1,1,1,1,1,1,1,1,0,0
1,1,1,1,1,1,1,1,1,0
# survival on two or three
1,1,1,a,0,0,0,0,0,1
# birth
0,1,1,1,0,0,0,0,0,1
";

pub const ROTATE8_BIRTH: &str = "\
@RULE Rotate8Birth
@TABLE
n_states:2
neighborhood:Moore
symmetries:rotate8
var a={0,1}
0,1,1,1,0,0,0,0,0,1
";

/// B3/S23 next state for a center and its live-neighbor count.
pub fn life_next(center: u32, live_neighbors: u32) -> u32 {
    match (center, live_neighbors) {
        (_, 3) | (1, 2) => 1,
        _ => 0,
    }
}

pub const GLIDER: &[Coord] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
pub const BLOCK: &[Coord] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
pub const BLINKER: &[Coord] = &[(0, 0), (1, 0), (2, 0)];
pub const L_TRIOMINO: &[Coord] = &[(0, 0), (1, 0), (0, 1)];
pub const R_PENTOMINO: &[Coord] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

pub fn pattern(coords: &[Coord]) -> SparseGrid {
    SparseGrid::from_coords(coords.iter().copied())
}

pub fn glider() -> SparseGrid {
    pattern(GLIDER)
}

pub fn block() -> SparseGrid {
    pattern(BLOCK)
}

pub fn blinker() -> SparseGrid {
    pattern(BLINKER)
}

pub fn l_triomino() -> SparseGrid {
    pattern(L_TRIOMINO)
}

pub fn r_pentomino() -> SparseGrid {
    pattern(R_PENTOMINO)
}
