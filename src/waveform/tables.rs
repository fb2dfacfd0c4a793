//! Constant lookup tables.

/// Piecewise-linear cosine half-period on the 0 to 32 duty scale.
pub const AMPLITUDE_TABLE: [u8; 16] = [
    32, 31, 27, 22, 16, 10, 5, 1, //
    0, 1, 5, 10, 16, 22, 27, 31,
];

/// Bridge patterns commutating the windings, one per quadrant.
pub const MOVING_POLARITY_TABLE: [u8; 4] = [5, 6, 10, 9];

/// Bridge patterns holding the rotor on a full step, one per quadrant.
pub const PARKING_POLARITY_TABLE: [u8; 4] = [1, 4, 2, 8];
