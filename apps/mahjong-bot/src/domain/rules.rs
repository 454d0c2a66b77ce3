pub const SEATS: usize = 4;

pub type Seat = u8; // 0..=3

/// Seat index check for values coming off the wire.
pub fn seat_from_index(index: u64) -> Option<Seat> {
    if (index as usize) < SEATS {
        Some(index as Seat)
    } else {
        None
    }
}
