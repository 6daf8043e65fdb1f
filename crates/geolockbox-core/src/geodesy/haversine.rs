use crate::models::Position;

/// Great-circle distance between two positions, in meters.
///
/// Uses the haversine formula on a sphere of radius `earth_radius_m`.
pub fn haversine_distance(from: &Position, to: &Position, earth_radius_m: f64) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    earth_radius_m * c
}

/// Sum of haversine distances between consecutive positions, in meters
pub fn path_length<'a, I>(positions: I, earth_radius_m: f64) -> f64
where
    I: IntoIterator<Item = &'a Position>,
{
    let mut iter = positions.into_iter();
    let Some(mut previous) = iter.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for current in iter {
        total += haversine_distance(previous, current, earth_radius_m);
        previous = current;
    }
    total
}
