//! Built-in Mumbai suburban network.
//!
//! The seed covers the suburban rail lines, the Navi Mumbai lines, the
//! monorail and the first metro lines, with travel times in minutes between
//! adjacent stops. Names are kept exactly as published by the source
//! timetable, so a few stations appear under more than one spelling
//! (e.g. "Vadala" and "Wadala"); joining those is left to whoever curates
//! the data.

use tracing::warn;

use super::graph::Network;

/// `(start, end, minutes)` between adjacent stops.
type Seed = (&'static str, &'static str, i64);

/// Western line.
const WESTERN: &[Seed] = &[
    ("Dahanu Road", "Vangaon", 13),
    ("Vangaon", "Boisar", 9),
    ("Boisar", "Umroli", 6),
    ("Umroli", "Palghar", 6),
    ("Palghar", "Kelve Rd.", 15),
    ("Kelve Rd.", "Saphale", 8),
    ("Saphale", "Vaitarna", 8),
    ("Vaitarna", "Virar", 9),
    ("Virar", "Nallasopara", 6),
    ("Nallasopara", "Vasai Rd.", 5),
    ("Vasai Rd.", "Naigaon", 5),
    ("Naigaon", "Bhayandar", 6),
    ("Bhayandar", "Mira Road", 5),
    ("Mira Road", "Dahisar", 5),
    ("Dahisar", "Borivali", 5),
    ("Borivali", "Kandivali", 6),
    ("Kandivali", "Malad", 3),
    ("Malad", "Goregaon", 5),
    ("Goregaon", "Ram Mandir", 2),
    ("Ram Mandir", "Jogeshwari", 3),
    ("Jogeshwari", "Andheri", 4),
    ("Andheri", "Vile Parle", 5),
    ("Vile Parle", "Santacruz", 3),
    ("Santacruz", "Khar Road", 2),
    ("Khar Road", "Bandra", 3),
    ("Bandra", "Mahim", 4),
    ("Mahim", "Matunga Rd.", 3),
    ("Matunga Rd.", "Dadar", 2),
    ("Dadar", "Prabhadevi", 2),
    ("Prabhadevi", "Lower Parel", 3),
    ("Lower Parel", "Mahalaxmi", 3),
    ("Mahalaxmi", "Mumbai Central (MMCT)", 3),
    ("Mumbai Central (MMCT)", "Grant Rd.", 2),
    ("Grant Rd.", "Charni Rd.", 3),
    ("Charni Rd.", "Marine Lines", 2),
    ("Marine Lines", "Churchgate", 3),
];

/// Central line, main and branch.
const CENTRAL: &[Seed] = &[
    ("Chatrapati Shivaji Maharaj Terminus (CSMT)", "Masjid", 3),
    ("Masjid", "Sandhurst Rd.", 2),
    ("Sandhurst Rd.", "Byculla", 3),
    ("Byculla", "Chinchpokali", 2),
    ("Chinchpokali", "Currey Rd.", 2),
    ("Currey Rd.", "Parel", 3),
    ("Parel", "Dadar", 3),
    ("Dadar", "Matunga", 3),
    ("Matunga", "Sion", 4),
    ("Sion", "Kurla", 4),
    ("Kurla", "Vidya Vihar", 3),
    ("Vidya Vihar", "Ghatkopar", 3),
    ("Ghatkopar", "Vikhroli", 5),
    ("Vikhroli", "Kanjur Marg", 3),
    ("Kanjur Marg", "Bhandup", 3),
    ("Bhandup", "Nahur", 3),
    ("Nahur", "Mulund", 3),
    ("Mulund", "Thane", 4),
    ("Thane", "Kalwa", 4),
    ("Kalwa", "Mumbra", 6),
    ("Mumbra", "Diva", 4),
    ("Diva", "Kopar", 5),
    ("Kopar", "Dombivali", 4),
    ("Dombivali", "Thakurli", 3),
    ("Thakurli", "Kalyan", 6),
    ("Kalyan", "Shahad", 5),
    ("Shahad", "Ambivli", 3),
    ("Ambivli", "Titwala", 5),
    ("Titwala", "Khadavali", 6),
    ("Khadavali", "Vashind", 8),
    ("Vashind", "Asangaon", 6),
    ("Asangaon", "Atgaon", 9),
    ("Atgaon", "Thansit", 7),
    ("Thansit", "Khardi", 5),
    ("Khardi", "Umbernali", 6),
    ("Umbernali", "Kasara", 12),
    ("Kalyan", "Vitthalvadi", 5),
    ("Vitthalvadi", "Ulhasnagar", 3),
    ("Ulhasnagar", "Ambernath", 6),
    ("Ambernath", "Badlapur", 8),
    ("Badlapur", "Vangani", 9),
    ("Vangani", "Shelu", 4),
    ("Shelu", "Neral", 4),
    ("Neral", "Bhivpuri Rd.", 7),
    ("Bhivpuri Rd.", "Karjat", 9),
    ("Karjat", "Palasdhari", 5),
    ("Palasdhari", "Kelavali", 7),
    ("Kelavali", "Dolavali", 3),
    ("Dolavali", "Lowjee", 4),
    ("Lowjee", "Khopoli", 4),
];

/// Harbour line.
const HARBOUR: &[Seed] = &[
    ("Chatrapati Shivaji Maharaj Terminus (CSMT)", "Masjid", 3),
    ("Masjid", "Sandhurst Rd.", 2),
    ("Sandhurst Rd.", "Dockyard Rd.", 2),
    ("Dockyard Rd.", "Reay Rd.", 2),
    ("Reay Rd.", "Cotton Green", 2),
    ("Cotton Green", "Sewri", 3),
    ("Sewri", "Vadala", 3),
    ("Vadala", "GTB Nagar", 4),
    ("GTB Nagar", "Chuna Bhatti", 3),
    ("Chuna Bhatti", "Kurla", 3),
    ("Kurla", "Tilak Nagar (LTT)", 3),
    ("Tilak Nagar (LTT)", "Chembur", 3),
    ("Chembur", "Govandi", 3),
    ("Govandi", "Mankhurd", 3),
    ("Mankhurd", "Vashi", 8),
    ("Vashi", "Sanpada", 3),
    ("Sanpada", "Juinagar", 3),
    ("Juinagar", "Nerul", 3),
    ("Nerul", "Seawood Darave", 3),
    ("Seawood Darave", "Belapur", 4),
    ("Belapur", "Kharghar", 4),
    ("Kharghar", "Manasarovar", 3),
    ("Manasarovar", "Khandeshwar", 3),
    ("Khandeshwar", "Panvel", 3),
    ("Vadala", "King's Circle", 4),
    ("King's Circle", "Mahim", 4),
    ("Mahim", "Bandra", 4),
    ("Bandra", "Khar Road", 3),
    ("Khar Road", "Santacruz", 2),
    ("Santacruz", "Vile Parle", 3),
    ("Vile Parle", "Andheri", 5),
    ("Andheri", "Jogeshwari", 4),
    ("Jogeshwari", "Ram Mandir", 3),
    ("Ram Mandir", "Goregaon", 2),
];

/// Metro line 1, Ghatkopar - Versova.
const METRO_1: &[Seed] = &[
    ("Ghatkopar", "Jagruti Nagar", 3),
    ("Jagruti Nagar", "Asalpha", 2),
    ("Asalpha", "Saki Naka", 2),
    ("Saki Naka", "Marol Naka", 1),
    ("Marol Naka", "Airport Road", 2),
    ("Airport Road", "Chakala/JB Nagar", 2),
    ("Chakala/JB Nagar", "Western Express Highway", 2),
    ("Western Express Highway", "Andheri", 2),
    ("Andheri", "Azad Nagar", 4),
    ("Azad Nagar", "D N Nagar", 2),
    ("D N Nagar", "Versova", 1),
];

/// Nerul - Uran line.
const NERUL_URAN: &[Seed] = &[
    ("Nerul", "Seawood Darave", 3),
    ("Seawood Darave", "Bamadongri", 13),
    ("Belapur", "Bamadongri", 14),
    ("Bamadongri", "Kharkopar", 4),
];

/// Trans-Harbour line.
const TRANS_HARBOUR: &[Seed] = &[
    ("Thane", "Airoli", 8),
    ("Airoli", "Rabale", 3),
    ("Rabale", "Ghansoli", 3),
    ("Ghansoli", "Koparkhairane", 3),
    ("Koparkhairane", "Turbhe", 4),
    ("Turbhe", "Juinagar", 4),
    ("Juinagar", "Nerul", 4),
    ("Nerul", "Seawood Darave", 4),
    ("Seawood Darave", "Belapur", 5),
    ("Belapur", "Kharghar", 4),
    ("Kharghar", "Manasarovar", 3),
    ("Manasarovar", "Khandeshwar", 3),
    ("Khandeshwar", "Panvel", 5),
    ("Turbhe", "Sanpada", 4),
    ("Sanpada", "Vashi", 4),
];

/// Monorail.
const MONORAIL: &[Seed] = &[
    ("Sant Gadge Maharaj Chowk", "Lower Parel", 2),
    ("Lower Parel", "Mint Colony", 2),
    ("Mint Colony", "Ambedkar Nagar", 3),
    ("Ambedkar Nagar", "Naigaon (near Dadar)", 3),
    ("Naigaon (near Dadar)", "Dadar East", 2),
    ("Dadar East", "Wadala Bridge", 3),
    ("Wadala Bridge", "Acharya Atre Nagar", 3),
    ("Acharya Atre Nagar", "Antop Hill", 2),
    ("Antop Hill", "GTB Nagar", 3),
    ("GTB Nagar", "Wadala", 2),
    ("Wadala", "Bhakti Park", 3),
    ("Bhakti Park", "Mysore Colony", 4),
    ("Mysore Colony", "Bharat Petroleum", 3),
    ("Bharat Petroleum", "Fertiliser Township", 3),
    ("Fertiliser Township", "VNP Marg Junction", 2),
    ("VNP Marg Junction", "Chembur", 3),
];

/// Metro lines 2A and 7.
const METRO_2A: &[Seed] = &[
    ("D N Nagar", "Lower Oshiwara", 3),
    ("Lower Oshiwara", "Oshiwara", 3),
    ("Oshiwara", "Goregaon (West)", 3),
    ("Goregaon (West)", "Pahadi Goregaon", 2),
    ("Pahadi Goregaon", "Lower Malad", 2),
    ("Lower Malad", "Malad (West)", 2),
    ("Malad (West)", "Valnai", 3),
    ("Valnai", "Dahanukarwadi", 2),
    ("Dahanukarwadi", "Kandivali (West)", 2),
    ("Kandivali (West)", "Pahadi Eksar", 2),
    ("Pahadi Eksar", "Borivali (West)", 2),
    ("Borivali (West)", "Eksar", 2),
    ("Eksar", "Mandapeshwar", 3),
    ("Mandapeshwar", "Kandarpada", 2),
    ("Kandarpada", "Anand Nagar", 3),
    ("Anand Nagar", "Dahisar (East)", 2),
    ("Dahisar (East)", "Ovaripada", 3),
    ("Ovaripada", "Rashtriya Udyan", 2),
    ("Rashtriya Udyan", "Devipada", 3),
    ("Devipada", "Magathane", 2),
    ("Magathane", "Poisar", 2),
    ("Poisar", "Akurli", 2),
    ("Akurli", "Kurar", 3),
    ("Kurar", "Dindoshi", 2),
    ("Dindoshi", "Aarey", 3),
    ("Aarey", "Goregaon (East)", 4),
    ("Goregaon (East)", "Jogeshwari (East)", 2),
    ("Jogeshwari (East)", "Mogra", 2),
    ("Mogra", "Western Express Highway", 3),
];
/// Every line in the seed, in the order it is loaded.
pub const LINES: &[(&str, &[Seed])] = &[
    ("Western", WESTERN),
    ("Central", CENTRAL),
    ("Harbour", HARBOUR),
    ("Metro 1", METRO_1),
    ("Nerul - Uran", NERUL_URAN),
    ("Trans-Harbour", TRANS_HARBOUR),
    ("Monorail", MONORAIL),
    ("Metro 2A / 7", METRO_2A),
];

/// Build the Mumbai suburban network.
///
/// Lines are loaded in [`LINES`] order, so station handles are stable
/// across runs.
pub fn mumbai_network() -> Network {
    let mut network = Network::new();
    for (line, connections) in LINES {
        for (start, end, minutes) in connections.iter() {
            if let Err(e) = network.add_connection(start, end, *minutes) {
                warn!(line, error = %e, "skipping seed connection");
            }
        }
    }
    network
}
