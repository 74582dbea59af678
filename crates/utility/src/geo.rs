pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Wraps a longitude in degrees back into the range [-180, 180).
pub fn normalize_longitude(longitude: f64) -> f64 {
    (longitude + 540.0).rem_euclid(360.0) - 180.0
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Point reached when travelling `distance_km` from (`latitude`, `longitude`)
/// along the initial compass bearing `bearing_deg` (0 = north, 90 = east) on
/// a spherical earth.
pub fn destination_point(
    latitude: f64,
    longitude: f64,
    bearing_deg: f64,
    distance_km: f64,
) -> (f64, f64) {
    let lat_rad = to_radians(latitude);
    let lon_rad = to_radians(longitude);
    let bearing_rad = to_radians(bearing_deg);

    // angular distance
    let delta = distance_km / EARTH_RADIUS_KM;

    let dest_lat_rad = (lat_rad.sin() * delta.cos()
        + lat_rad.cos() * delta.sin() * bearing_rad.cos())
    .asin();
    let dest_lon_rad = lon_rad
        + (bearing_rad.sin() * delta.sin() * lat_rad.cos())
            .atan2(delta.cos() - lat_rad.sin() * dest_lat_rad.sin());

    (
        to_degrees(dest_lat_rad),
        normalize_longitude(to_degrees(dest_lon_rad)),
    )
}
