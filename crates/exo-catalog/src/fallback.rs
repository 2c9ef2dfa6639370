//! Built-in sample catalog.
//!
//! Served when the archive cannot be reached or returns nothing usable. The
//! set is fixed (no jitter), ordered like an archive response (newest
//! discovery first), and covers five discovery methods so every chart has
//! something to draw.

use exo_core::{Column, ExoplanetRecord};

/// The sample catalog, newest discovery first.
#[must_use]
pub fn sample() -> Vec<ExoplanetRecord> {
    use Column::{
        DistanceParsec, EquilibriumTempK, InsolationFlux, OrbitalPeriodDays, PlanetMassEarth,
        PlanetRadiusEarth, SemiMajorAxisAu, StarMassSolar, StarRadiusSolar, StarTemperatureK,
    };

    vec![
        ExoplanetRecord::new("TOI-700 d", "TOI-700", "Transit", 2020)
            .with(OrbitalPeriodDays, 37.426)
            .with(PlanetRadiusEarth, 1.144)
            .with(PlanetMassEarth, 1.72)
            .with(SemiMajorAxisAu, 0.1633)
            .with(StarTemperatureK, 3480.0)
            .with(StarRadiusSolar, 0.42)
            .with(StarMassSolar, 0.415)
            .with(DistanceParsec, 31.127)
            .with(EquilibriumTempK, 269.0)
            .with(InsolationFlux, 0.86),
        ExoplanetRecord::new("TRAPPIST-1 e", "TRAPPIST-1", "Transit", 2017)
            .with(OrbitalPeriodDays, 6.10)
            .with(PlanetRadiusEarth, 0.92)
            .with(PlanetMassEarth, 0.69)
            .with(SemiMajorAxisAu, 0.02925)
            .with(StarTemperatureK, 2566.0)
            .with(StarRadiusSolar, 0.119)
            .with(StarMassSolar, 0.0898)
            .with(DistanceParsec, 12.43)
            .with(EquilibriumTempK, 250.0)
            .with(InsolationFlux, 0.66),
        ExoplanetRecord::new("Proxima Centauri b", "Proxima Centauri", "Radial Velocity", 2016)
            .with(OrbitalPeriodDays, 11.18)
            .with(PlanetRadiusEarth, 1.30)
            .with(PlanetMassEarth, 1.27)
            .with(SemiMajorAxisAu, 0.0485)
            .with(StarTemperatureK, 3050.0)
            .with(StarRadiusSolar, 0.141)
            .with(StarMassSolar, 0.12)
            .with(DistanceParsec, 1.301)
            .with(EquilibriumTempK, 234.0)
            .with(InsolationFlux, 0.65),
        ExoplanetRecord::new("K2-18 b", "K2-18", "Transit", 2015)
            .with(OrbitalPeriodDays, 32.94)
            .with(PlanetRadiusEarth, 2.61)
            .with(PlanetMassEarth, 8.63)
            .with(SemiMajorAxisAu, 0.1591)
            .with(StarTemperatureK, 3457.0)
            .with(StarRadiusSolar, 0.44)
            .with(StarMassSolar, 0.50)
            .with(DistanceParsec, 38.0)
            .with(EquilibriumTempK, 255.0)
            .with(InsolationFlux, 1.0),
        ExoplanetRecord::new("Kepler-186 f", "Kepler-186", "Transit", 2014)
            .with(OrbitalPeriodDays, 129.9)
            .with(PlanetRadiusEarth, 1.17)
            .with(PlanetMassEarth, 1.44)
            .with(SemiMajorAxisAu, 0.432)
            .with(StarTemperatureK, 3755.0)
            .with(StarRadiusSolar, 0.52)
            .with(StarMassSolar, 0.54)
            .with(DistanceParsec, 177.6)
            .with(InsolationFlux, 0.29),
        ExoplanetRecord::new("HR 8799 b", "HR 8799", "Imaging", 2008)
            .with(OrbitalPeriodDays, 164_250.0)
            .with(PlanetMassEarth, 2225.0)
            .with(SemiMajorAxisAu, 68.0)
            .with(StarTemperatureK, 7430.0)
            .with(StarRadiusSolar, 1.34)
            .with(StarMassSolar, 1.47)
            .with(DistanceParsec, 41.29),
        ExoplanetRecord::new("OGLE-2005-BLG-390L b", "OGLE-2005-BLG-390L", "Microlensing", 2005)
            .with(OrbitalPeriodDays, 3500.0)
            .with(PlanetMassEarth, 5.5)
            .with(SemiMajorAxisAu, 2.6)
            .with(StarMassSolar, 0.22)
            .with(DistanceParsec, 6600.0),
        ExoplanetRecord::new("HD 209458 b", "HD 209458", "Transit", 1999)
            .with(OrbitalPeriodDays, 3.5247)
            .with(PlanetRadiusEarth, 15.6)
            .with(PlanetMassEarth, 232.0)
            .with(SemiMajorAxisAu, 0.04707)
            .with(StarTemperatureK, 6065.0)
            .with(StarRadiusSolar, 1.16)
            .with(StarMassSolar, 1.12)
            .with(DistanceParsec, 48.3)
            .with(EquilibriumTempK, 1449.0),
        ExoplanetRecord::new("51 Pegasi b", "51 Pegasi", "Radial Velocity", 1995)
            .with(OrbitalPeriodDays, 4.2308)
            .with(PlanetMassEarth, 150.0)
            .with(SemiMajorAxisAu, 0.0527)
            .with(StarTemperatureK, 5768.0)
            .with(StarRadiusSolar, 1.15)
            .with(StarMassSolar, 1.09)
            .with(DistanceParsec, 15.47),
        ExoplanetRecord::new("PSR B1257+12 c", "PSR B1257+12", "Pulsar Timing", 1992)
            .with(OrbitalPeriodDays, 66.54)
            .with(PlanetMassEarth, 4.3)
            .with(SemiMajorAxisAu, 0.36)
            .with(StarMassSolar, 1.4)
            .with(DistanceParsec, 710.0),
    ]
}
