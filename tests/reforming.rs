//! End-to-end checks of the public reforming API.

use approx::assert_relative_eq;
use twine_core::Model;
use twine_reforming::{
    models::reforming::{CrossoverConfig, MixtureState, ReactionEquilibrium, crossover_temperature},
    support::thermo::{
        Mixture, PropertyError, Reaction, Species,
        capability::{HasEquilibriumConstant, HasHeatCapacity},
        delta::{delta, deltas},
        model::{Nist, Reid, ShomateReaction},
    },
};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::bar,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

fn celsius(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(t)
}

#[test]
fn identity_table_delta_is_weight_sum() -> Result<(), PropertyError> {
    let expected = [
        (Reaction::Drm, 2.0),
        (Reaction::Srm1, 2.0),
        (Reaction::Srm2, 2.0),
        (Reaction::Wgs, 0.0),
    ];
    for (reaction, sum) in expected {
        let d = delta(|_| 1.0, &reaction.participants(), &reaction.stoichiometry())?;
        assert_eq!(d, sum, "{reaction}");
    }
    Ok(())
}

#[test]
fn delta_columns_match_precomputed_tables() -> Result<(), PropertyError> {
    let columns: [fn(Species) -> f64; 3] = [
        |s| s.nist().a,
        |s| s.nist().hf298,
        |s| s.reid().gf298,
    ];
    let reaction = Reaction::Srm1;
    let [a, hr298, gr298] = deltas(&columns, &reaction.participants(), &reaction.stoichiometry())?;

    assert_eq!(a, reaction.nist_deltas().a);
    assert_eq!(hr298, reaction.nist_deltas().hr298);
    assert_eq!(gr298, reaction.reid_deltas().gr298);
    Ok(())
}

#[test]
fn misaligned_participants_are_rejected() {
    let result = delta(|_| 1.0, &[Species::CH4, Species::H2O], &[-1.0]);
    assert!(matches!(
        result,
        Err(PropertyError::ShapeMismatch { expected: 2, found: 1, .. })
    ));
}

#[test]
fn reforming_at_600_celsius() -> Result<(), PropertyError> {
    let t = celsius(600.0);

    // Endothermic reforming is not yet favored; the shift is.
    let drm = ReactionEquilibrium::new(Nist, Reaction::Drm).call(&t)?;
    assert!(drm.k > 0.0 && drm.k < 1.0);
    assert_relative_eq!(drm.k, 0.194_914_844_230_221_26, max_relative = 1e-6);

    let wgs = ReactionEquilibrium::new(Nist, Reaction::Wgs).call(&t)?;
    assert!(wgs.k > 1.0);

    // The value object agrees with the model on enthalpy.
    let drm_object = ShomateReaction::from_reaction(Reaction::Drm);
    assert_relative_eq!(drm_object.enthalpy_kj_mol(t)?, drm.delta_h, epsilon = 1e-9);
    Ok(())
}

#[test]
fn conventions_differ() -> Result<(), PropertyError> {
    let t = celsius(600.0);
    for reaction in Reaction::ALL {
        let nist = Nist.equilibrium_constant(reaction, t)?;
        let reid = Reid.equilibrium_constant(reaction, t)?;
        assert_ne!(nist, reid, "{reaction}");
    }
    assert_ne!(
        Nist.heat_capacity(Species::Ar, t)?,
        Reid.heat_capacity(Species::Ar, t)?
    );
    Ok(())
}

#[test]
fn shomate_reaction_from_caller_data() -> Result<(), PropertyError> {
    // Methanation, the reverse of SRM1, built from table rows.
    let species = [Species::CO, Species::H2, Species::CH4, Species::H2O];
    let methanation = ShomateReaction::new(
        species.iter().map(|s| s.nist().shomate_row()).collect(),
        species.iter().map(|s| s.nist().hf298).collect(),
        species.iter().map(|s| s.nist().sf298()).collect(),
        vec![-1.0, -3.0, 1.0, 1.0],
    )?;
    let srm1 = ShomateReaction::from_reaction(Reaction::Srm1);

    let t = celsius(600.0);
    assert_relative_eq!(
        methanation.gibbs_kj_mol(t)?,
        -srm1.gibbs_kj_mol(t)?,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        methanation.equilibrium_constant(t)? * srm1.equilibrium_constant(t)?,
        1.0,
        epsilon = 1e-9
    );
    Ok(())
}

#[test]
fn biogas_feed_properties() -> Result<(), PropertyError> {
    let feed = Mixture::from_species(&[
        (Species::CH4, 0.3),
        (Species::CO2, 0.2),
        (Species::H2O, 0.0),
        (Species::H2, 0.0),
        (Species::CO, 0.0),
        (Species::Ar, 0.5),
    ])?;
    assert!(feed.is_normalized());
    assert_relative_eq!(feed.molar_mass().get::<kilogram_per_mole>(), 0.033_588, epsilon = 1e-12);

    let state = MixtureState::new(feed).call(&(
        ThermodynamicTemperature::new::<kelvin>(873.15),
        Pressure::new::<bar>(1.0),
    ))?;
    assert_relative_eq!(state.heat_capacity, 40.802_220_111_423_41, max_relative = 1e-12);
    assert_relative_eq!(
        state.density.get::<kilogram_per_cubic_meter>(),
        0.462_684_835_793_788_3,
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn reforming_becomes_favored_above_crossover() {
    let config = CrossoverConfig::default();
    for reaction in [Reaction::Drm, Reaction::Srm1, Reaction::Srm2] {
        let crossover = crossover_temperature(&Nist, reaction, config)
            .expect("reforming reactions cross over between 300 and 1500 K");
        let t = crossover.temperature.get::<kelvin>();
        assert!((800.0..1000.0).contains(&t), "{reaction} at {t} K");

        let hotter = ReactionEquilibrium::new(Nist, reaction)
            .call(&ThermodynamicTemperature::new::<kelvin>(t + 50.0))
            .expect("valid temperature");
        assert!(hotter.k > 1.0);
    }
}

#[test]
fn non_finite_inputs_and_results_are_errors() {
    let drm = ReactionEquilibrium::new(Nist, Reaction::Drm);
    assert!(matches!(
        drm.call(&ThermodynamicTemperature::new::<kelvin>(f64::INFINITY)),
        Err(PropertyError::OutOfDomain { .. })
    ));
    assert!(matches!(
        drm.call(&ThermodynamicTemperature::new::<kelvin>(1e-310)),
        Err(PropertyError::Calculation { .. })
    ));

    let feed = Mixture::from_species(&[(Species::CH4, 0.6), (Species::CO2, 0.4)])
        .expect("valid fractions");
    let state = MixtureState::new(feed).call(&(
        ThermodynamicTemperature::new::<kelvin>(1e-310),
        Pressure::new::<bar>(1.0),
    ));
    assert!(matches!(state, Err(PropertyError::Calculation { .. })));
}
