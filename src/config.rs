use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;
pub const FLEET: [ShipClass; 4] = [
    ShipClass::new("single-deck", 1, 4),
    ShipClass::new("double-deck", 2, 3),
    ShipClass::new("three-deck", 3, 2),
    ShipClass::new("four-deck", 4, 1),
];

/// Total number of decks in the standard fleet.
pub const TOTAL_DECKS: usize = fleet_decks(&FLEET);

const fn fleet_decks(fleet: &[ShipClass]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length() * fleet[i].count();
        i += 1;
    }
    total
}

/// Look up the fleet class for ships of the given length.
pub fn ship_class(length: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.length() == length)
}
