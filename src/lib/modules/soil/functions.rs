// Latitude bands used to pick a soil profile from the table
pub const NORTH_BAND_LAT: f64 = 37.0; // [°]
pub const CENTRAL_BAND_LAT: f64 = 35.0; // [°]

/// Index in the soil table of the profile suggested for a location.
/// Simple latitude rule: north of 37° the first profile, between 35° and 37°
/// the second one, south of 35° the fourth one. Longitude is not used yet.
pub fn suggestion_index(
    lat: f64,  // latitude [°]
    _lon: f64, // longitude [°]
) -> usize {
    if lat > NORTH_BAND_LAT {
        0
    } else if lat > CENTRAL_BAND_LAT {
        1
    } else {
        3
    }
}
