#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;
pub mod provider;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{
    gregorian_julian_day, Ephemeris, FixedZoneResolver, Geocoder, StaticGeocoder,
    TimezoneResolver,
};
pub use types::{
    house_system_name, Body, EphemerisError, EphemerisSettings, GeoLocation, GeoPlace,
    HouseFrame, ProviderError, RawPosition, DEFAULT_FLAGS, DEFAULT_HOUSE_SYSTEM,
};
