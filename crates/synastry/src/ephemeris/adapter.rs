use crate::ephemeris::provider::Ephemeris;
use crate::ephemeris::types::{
    house_system_name, Body, EphemerisError, GeoLocation, HouseFrame, RawPosition, HOUSE_SYSTEMS,
};
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use swisseph::{AscMc, Cusp};

// GREG_CAL = 1
const GREG_CAL: i32 = 1;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`. The path is handed to the
    /// library so `FLG_SWIEPH` reads its data files from there. With no path
    /// at all only the built-in Moshier ephemeris (`FLG_MOSEPH`) is usable.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.or_else(|| env::var("SWISS_EPHEMERIS_PATH").ok().map(PathBuf::from));

        if let Some(path) = &path {
            if !path.exists() {
                return Err(EphemerisError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                });
            }
            set_ephe_path(&path.to_string_lossy());
            log::info!("Swiss Ephemeris data path: {}", path.display());
        }

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&PathBuf> {
        self.ephemeris_path.as_ref()
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        julday(year, month as i32, day as i32, hour, GREG_CAL)
    }

    fn houses(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: char,
    ) -> Result<HouseFrame, EphemerisError> {
        if house_system_name(house_system).is_none() {
            return Err(EphemerisError::InvalidHouseSystem {
                system: house_system,
                valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
            });
        }

        let (c, a) = houses_ex(jd_ut, 0, location.lat, location.lon, house_system as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = vec![
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusp_values.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp at lat {} lon {}", location.lat, location.lon),
            });
        }

        Ok(HouseFrame {
            cusps: cusp_values,
            points: vec![ascmc.ascendant, ascmc.mc],
        })
    }

    fn position(&self, jd_ut: f64, body: Body, flags: i32) -> Result<RawPosition, EphemerisError> {
        let result = calc_ut(jd_ut, body.swiss_id() as u32, flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                jd_ut,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        Ok(RawPosition::new(result.out.to_vec()))
    }
}
