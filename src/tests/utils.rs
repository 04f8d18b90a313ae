use crate::dataset::load_dir;
use crate::domain::RawListing;
use crate::model::Artifact;
use crate::training::train;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Cities other than the Lekki/Lagos listing, two listings each.
pub const OTHER_CITIES: [&str; 14] = [
    "Ajah", "Ikoyi", "Ikeja", "Yaba", "Surulere", "Magodo", "Gbagada", "Ikorodu", "Ojodu",
    "Isheri", "Ogudu", "Ketu", "Maryland", "Ilupeju",
];

const TITLES: [&str; 3] = [
    "4 Bedroom Detached Duplex",
    "3 Bedroom Terraced Duplex",
    "5 Bedroom Semi-detached House",
];

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{tag}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Scraped table with 30 usable rows, one row on the parking edge and two broken rows.
///
/// Prices rise with the city index, so the two Ilupeju rows sit above the
/// 96th percentile.
pub fn sample_csv() -> String {
    let mut csv = String::from("title,address,bed,bath,toilet,pkn_space,price\n");
    csv.push_str("3 Bedroom Duplex,\"Lekki, Lagos, Nigeria\",3 beds,3 baths,3 Toilets,3 Parking Spaces,\"₦35,000,000\"\n");

    for (i, city) in OTHER_CITIES.iter().enumerate() {
        for rep in 0..2 {
            let bed = 3 + i % 3;
            let parking = 3 + i % 4;
            let price = 20_000_000 + i * 5_000_000 + rep * 1_000_000;
            csv.push_str(&format!(
                "{},\"Estate {rep}, {city}, Lagos\",{bed},{bed},{},{parking},\"₦{price}\"\n",
                TITLES[(i + rep) % 3],
                bed + 1,
            ));
        }
    }

    // parking on the excluded edge
    csv.push_str("3 Bedroom Duplex,\"Lekki, Lagos, Nigeria\",3,3,3,2,\"₦30,000,000\"\n");
    // missing price
    csv.push_str("3 Bedroom Duplex,\"Lekki, Lagos, Nigeria\",3,3,3,3,\n");
    // non-numeric bedrooms
    csv.push_str("Land,\"Ajah, Lagos\",-,3,3,3,\"₦5,000,000\"\n");
    csv
}

/// 17 towns with strictly falling listing counts: `Town00` has 20 listings,
/// `Town16` has 4. Every row passes the range and price filters.
pub fn many_towns_csv() -> String {
    let mut csv = String::from("title,address,bed,bath,toilet,pkn_space,price\n");
    for town in 0..17 {
        for _ in 0..(20 - town) {
            csv.push_str(&format!(
                "3 Bedroom Duplex,\"Estate, Town{town:02}, Lagos\",3,3,4,3,\"₦30,000,000\"\n"
            ));
        }
    }
    csv
}

fn load_csv(tag: &str, csv: String) -> Vec<RawListing> {
    let dir = temp_dir(tag);
    fs::write(dir.join("house_data.csv"), csv).unwrap();
    load_dir(&dir).unwrap()
}

pub fn sample_rows() -> Vec<RawListing> {
    load_csv("sample_rows", sample_csv())
}

pub fn many_towns_rows() -> Vec<RawListing> {
    load_csv("many_towns", many_towns_csv())
}

pub fn trained_artifact() -> Artifact {
    let (artifact, _) = train(&sample_rows()).unwrap();
    artifact
}
