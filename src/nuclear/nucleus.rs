//=====================================================================
// Helper struct to represent a single nuclide from the mass table.
//=====================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NucleusData {
    pub mass: f64,   // MeV
    pub mass_u: f64, // u
    pub element_symbol: String,
    pub isotopic_symbol: String,
    pub pretty_isotopic_symbol: String,
    pub z: usize,
    pub a: usize,
}

impl std::fmt::Display for NucleusData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.isotopic_symbol)
    }
}

impl NucleusData {
    // LaTeX form of the isotopic symbol for plot labels
    pub fn latex_rep(&self) -> String {
        format!("$^{{{}}}${}", self.a, self.element_symbol)
    }
}

// Pack a (Z, A) pair into a unique mass table key
#[inline]
pub fn nucleus_id(z: usize, a: usize) -> usize {
    if z > a { z * z + z + a } else { a * a + z }
}
