//! Spatial reference tags
//!
//! A `SpatialReference` only identifies the frame a set of bounds is expressed
//! in. Nothing in this crate converts coordinates between references; two tags
//! are equal when their canonical `AUTHORITY:CODE` identifiers are equal.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::errors::{ExtentError, ExtentResult};

lazy_static! {
    static ref SRS_REGISTRY: SrsRegistry = {
        let content = include_str!("../../srs_registry.toml");
        SrsRegistry::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse spatial reference registry: {}", e);
            SrsRegistry::default()
        })
    };

    static ref AUTHORITY_CODE: Regex =
        Regex::new(r"^([A-Za-z][A-Za-z0-9_]*)\s*:\s*([A-Za-z0-9_.\-]+)$").unwrap();
}

/// Identifier of the coordinate system a bbox is expressed in
#[derive(Debug, Clone)]
pub enum SpatialReference {
    /// WGS 84 geographic (EPSG:4326)
    Wgs84,
    /// Web Mercator (EPSG:3857)
    WebMercator,
    /// WGS 84 / UTM zone (zone, northern hemisphere)
    Utm(u8, bool),
    /// Any other EPSG code
    Epsg(u32),
    /// A code from a non-EPSG authority, e.g. `IGNF:LAMB93`
    Authority(String, String),
}

impl SpatialReference {
    /// Build a reference from an EPSG code, picking the named variant when there is one
    pub fn from_epsg(code: u32) -> Self {
        match code {
            4326 => SpatialReference::Wgs84,
            3857 => SpatialReference::WebMercator,
            32601..=32660 => SpatialReference::Utm((code - 32600) as u8, true),
            32701..=32760 => SpatialReference::Utm((code - 32700) as u8, false),
            _ => SpatialReference::Epsg(code),
        }
    }

    /// Parse an identifier: `EPSG:32631`, `32631`, `IGNF:LAMB93` or a registry alias
    pub fn parse(s: &str) -> ExtentResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ExtentError::InvalidSrs(s.to_string()));
        }

        if let Some(target) = SRS_REGISTRY.resolve_alias(trimmed) {
            return Self::parse_identifier(target);
        }

        if let Ok(code) = trimmed.parse::<u32>() {
            return Ok(Self::from_epsg(code));
        }

        Self::parse_identifier(trimmed)
    }

    fn parse_identifier(s: &str) -> ExtentResult<Self> {
        let caps = AUTHORITY_CODE.captures(s)
            .ok_or_else(|| ExtentError::InvalidSrs(s.to_string()))?;
        let authority = caps[1].to_uppercase();
        let code = &caps[2];

        if authority == "EPSG" {
            let epsg = code.parse::<u32>()
                .map_err(|_| ExtentError::InvalidSrs(format!("Invalid EPSG code: {}", code)))?;
            Ok(Self::from_epsg(epsg))
        } else {
            Ok(SpatialReference::Authority(authority, code.to_uppercase()))
        }
    }

    /// EPSG code of this reference, if it has one
    pub fn epsg_code(&self) -> Option<u32> {
        match self {
            SpatialReference::Wgs84 => Some(4326),
            SpatialReference::WebMercator => Some(3857),
            SpatialReference::Utm(zone, north) => Some(utm_epsg(*zone, *north)),
            SpatialReference::Epsg(code) => Some(*code),
            SpatialReference::Authority(name, code) if name.eq_ignore_ascii_case("EPSG") => {
                code.parse().ok()
            },
            SpatialReference::Authority(..) => None,
        }
    }

    /// Canonical `AUTHORITY:CODE` identifier, the basis of equality
    pub fn identifier(&self) -> String {
        match self {
            SpatialReference::Wgs84 => "EPSG:4326".to_string(),
            SpatialReference::WebMercator => "EPSG:3857".to_string(),
            SpatialReference::Utm(zone, north) => format!("EPSG:{}", utm_epsg(*zone, *north)),
            SpatialReference::Epsg(code) => format!("EPSG:{}", code),
            SpatialReference::Authority(name, code) => match self.epsg_code() {
                Some(epsg) => format!("EPSG:{}", epsg),
                None => format!("{}:{}", name.to_uppercase(), code.to_uppercase()),
            },
        }
    }

    /// Human-readable label
    pub fn description(&self) -> String {
        let id = self.identifier();
        if let Some(name) = SRS_REGISTRY.name_of(&id) {
            return format!("{} ({})", name, id);
        }

        match self {
            SpatialReference::Utm(zone, north) => {
                format!("WGS 84 / UTM zone {}{} ({})", zone, if *north { 'N' } else { 'S' }, id)
            },
            _ => id,
        }
    }
}

fn utm_epsg(zone: u8, north: bool) -> u32 {
    if north { 32600 + zone as u32 } else { 32700 + zone as u32 }
}

impl PartialEq for SpatialReference {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for SpatialReference {}

impl Hash for SpatialReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for SpatialReference {
    type Err = ExtentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpatialReference::parse(s)
    }
}

/// Aliases and display names loaded from the embedded registry file
#[derive(Debug, Default)]
struct SrsRegistry {
    // Upper-cased alias to canonical identifier
    aliases: HashMap<String, String>,
    // Canonical identifier to display name
    names: HashMap<String, String>,
}

impl SrsRegistry {
    fn from_str(content: &str) -> ExtentResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| ExtentError::GenericError(format!("Failed to parse TOML: {}", e)))?;

        let mut registry = SrsRegistry::default();
        Self::parse_table(&toml_value, "aliases", &mut registry.aliases, true);
        Self::parse_table(&toml_value, "names", &mut registry.names, false);
        Ok(registry)
    }

    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<String, String>, upper_keys: bool) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let Some(value) = v.as_str() {
                    let key = if upper_keys { k.to_uppercase() } else { k.clone() };
                    target.insert(key, value.to_string());
                }
            }
        }
    }

    fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_uppercase()).map(String::as_str)
    }

    fn name_of(&self, identifier: &str) -> Option<&str> {
        self.names.get(identifier).map(String::as_str)
    }
}
