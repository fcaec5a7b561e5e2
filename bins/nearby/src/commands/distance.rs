//! `nearby distance`

use nearby_core::Result;
use nearby_geo::Coordinate;

/// Print the distance between two coordinates in kilometers
pub fn run(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<()> {
    let from = Coordinate::try_new(lat1, lon1)?;
    let to = Coordinate::try_new(lat2, lon2)?;
    let km = nearby_geo::distance(&from, &to)?;
    println!("{:.3} km", km);
    Ok(())
}
