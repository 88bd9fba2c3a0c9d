use std::fmt;
use std::str::FromStr;

use crate::error::DocsError;

/// A part of the site whose entries are embedded rather than fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Index,
    Contents,
    Glossary,
}

impl CatalogSection {
    pub const NAMES: [&'static str; 3] = ["index", "contents", "glossary"];

    pub fn items(self) -> &'static [&'static str] {
        match self {
            CatalogSection::Index | CatalogSection::Contents => &SECTION_TITLES,
            CatalogSection::Glossary => &GLOSSARY_TERMS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CatalogSection::Index => "index",
            CatalogSection::Contents => "contents",
            CatalogSection::Glossary => "glossary",
        }
    }
}

impl FromStr for CatalogSection {
    type Err = DocsError;

    /// Exact, case-sensitive names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(CatalogSection::Index),
            "contents" => Ok(CatalogSection::Contents),
            "glossary" => Ok(CatalogSection::Glossary),
            other => Err(DocsError::validation(format!(
                "Invalid category: {other}. Must be one of: {}",
                CatalogSection::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level chapters of the SDK documentation; the index and the table of
/// contents list the same entries.
pub const SECTION_TITLES: [&str; 31] = [
    "Introduction",
    "SDK Contents",
    "SDK Overview",
    "Using The SDK",
    "SDK EULA",
    "Release Notes",
    "Samples, Schemas, Tutorials and Primers",
    "Developer Mode",
    "Menus",
    "The Project Editor",
    "The Scenery Editor",
    "The Material Editor",
    "The Script Editor",
    "The Aircraft Editor",
    "Aircraft Debug Menu",
    "The Aircraft Tab",
    "The Flight Model Tab",
    "The AI Tab",
    "The Cockpit Tab",
    "The Gameplay Tab",
    "The Engines Tab",
    "The Systems Tab",
    "The Cameras Tab",
    "The Custom Parameters Tab",
    "The Visual Effects Editor",
    "External Asset Creation",
    "Content Configuration",
    "Programming APIs",
    "Additional Information",
    "How To Create An Aircraft",
    "World Hub",
];

pub const GLOSSARY_TERMS: [&str; 132] = [
    "ADC",
    "add-ons",
    "ADF",
    "ADI",
    "ADPCM",
    "AFM",
    "AGL",
    "AH",
    "AHRS",
    "ambisonic",
    "AMSL",
    "AoA",
    "AOC",
    "API",
    "APU",
    "ATC",
    "BGL",
    "bpp",
    "Camber",
    "CAS",
    "CFD",
    "CG",
    "CGL",
    "Chord",
    "CoL",
    "dB",
    "dBTP",
    "DDS",
    "de-crab",
    "DEM",
    "Dihedral",
    "DME",
    "DoF",
    "DRM",
    "EAS",
    "ECU",
    "EGT",
    "ELT",
    "EPR",
    "FAF",
    "FIS",
    "FL",
    "flaps",
    "FLC",
    "FOV",
    "FSUIPC",
    "ft",
    "ftlbs",
    "GA",
    "Gallon",
    "GDI+",
    "glTF",
    "GPS",
    "GPWS",
    "GUID",
    "hp",
    "hPa",
    "IAF",
    "IAS",
    "ICAO",
    "ICAO code",
    "ICU",
    "IFR",
    "ILS",
    "Incidence",
    "inHg",
    "ISA",
    "ITT",
    "kcas",
    "kias",
    "Knot",
    "ktas",
    "lbf",
    "lbs",
    "LDA",
    "LKFS",
    "LOD",
    "LU",
    "MAC",
    "Mach",
    "Makefile",
    "MFD",
    "MOI",
    "mph",
    "MSL",
    "MTOW",
    "N1",
    "N2",
    "NDB",
    "nm",
    "OOI",
    "OSM",
    "Oswald Efficiency Factor",
    "Pa",
    "pbh",
    "PBR",
    "PCM",
    "Percent Over 100",
    "PFD",
    "PID",
    "POH",
    "POI",
    "psf",
    "psi",
    "quadkey",
    "Rankine",
    "RNAV",
    "ROC",
    "RPM",
    "RTO",
    "RTPC",
    "SDF",
    "slug",
    "Slug sqft",
    "sqft",
    "STOL",
    "Sweep",
    "Tacan",
    "TAS",
    "TCAS",
    "TIN",
    "TOGA",
    "Twist",
    "UI",
    "VASI",
    "VFR",
    "VFS",
    "VMO",
    "VOR",
    "WASM",
    "WEP",
    "Zulu Time",
];
