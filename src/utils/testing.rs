#![allow(dead_code)]

//=====================================================================
// Utility functions to aid in accelerating testing
//=====================================================================

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::nuclear::MassTable;

// These variables hold test data filepaths in a way where they are
// accessible to all tests in all files, and where the mass table can
// be parsed once and reused everywhere.
lazy_static! {
    pub static ref TEST_MASS_TABLE: &'static str = "test_nuclear_data_files/test_mass_table.txt";
    pub static ref TEST_AZURE_SFACTOR: &'static str = "test_nuclear_data_files/test_azure_sfactor.txt";
    pub static ref TEST_CROSS_SECTION: &'static str = "test_nuclear_data_files/test_cross_section.txt";
    pub static ref TEST_CONFIG: &'static str = "test_nuclear_data_files/test_config.json";
    pub static ref TEST_CONFIG_XS: &'static str = "test_nuclear_data_files/test_config_xs.json";

    static ref MASS_TABLE: Mutex<Option<MassTable>> = Mutex::new(None);
}

// Parse the test mass table once and hand out clones
pub fn get_test_mass_table() -> MassTable {
    let mut cached = MASS_TABLE.lock().unwrap();
    if cached.is_none() {
        *cached = Some(MassTable::from_file(*TEST_MASS_TABLE).expect("Failed to parse test mass table"));
    }
    cached.clone().unwrap()
}
