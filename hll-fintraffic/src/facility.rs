//! Parking facility metadata.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV of the Park & Ride facilities this site knows about.
pub static CSV_OBJECT: &str = include_str!("../fixtures/facilities.csv");

/// Fintraffic facility id of the Ruoholahti Park & Ride.
pub const RUOHOLAHTI: u32 = 619;

/// A Park & Ride facility with its Fintraffic station metadata.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub facility_id: u32,
    pub name: String,
    pub district: String,
    /// Total number of parking spaces
    pub capacity: u32,
}

impl Facility {
    /// Get the facility vector from the embedded CSV.
    pub fn get_facility_vector() -> Vec<Facility> {
        if let Ok(f) = Facility::parse_facility_csv(CSV_OBJECT) {
            f
        } else {
            panic!("failed to parse facilities csv")
        }
    }

    /// Parse a CSV string of facility data into a vector of Facilities.
    ///
    /// Expected CSV columns: facility_id, name, district, capacity
    pub fn parse_facility_csv(csv_object: &str) -> Result<Vec<Facility>, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        rdr.deserialize().collect()
    }

    /// Look up a facility by its Fintraffic id in the embedded CSV.
    pub fn lookup(facility_id: u32) -> Option<Facility> {
        Facility::get_facility_vector()
            .into_iter()
            .find(|f| f.facility_id == facility_id)
    }
}
