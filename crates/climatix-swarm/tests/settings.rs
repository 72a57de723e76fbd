//! Settings loading from file and environment
//!
//! Kept to a single test so environment changes never race.

use climatix_common::ClimatixError;
use climatix_swarm::settings::CONFIG_FILE_VAR;
use climatix_swarm::ClimatixSettings;

#[test]
fn test_layered_settings() {
    let dir = std::env::temp_dir().join(format!("climatix-settings-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    // file overrides defaults
    let file = dir.join("climatix.toml");
    std::fs::write(
        &file,
        r#"
bounds = [[0.0, 0.9]]

[swarm]
population = 12
inertia = 0.7

[scenario]
occupancy = 8.0
"#,
    )
    .unwrap();
    std::env::set_var(CONFIG_FILE_VAR, &file);

    let settings = ClimatixSettings::load().unwrap();
    assert_eq!(settings.swarm.population, 12);
    assert_eq!(settings.swarm.inertia, 0.7);
    assert_eq!(settings.swarm.iterations, 100);
    assert_eq!(settings.scenario.occupancy, 8.0);
    assert_eq!(settings.scenario.temperature, 26.0);
    assert_eq!(settings.bounds.get(0).unwrap().high, 0.9);

    // environment overrides the file
    std::env::set_var("CLIMATIX_SWARM__POPULATION", "50");
    std::env::set_var("CLIMATIX_SWARM__SEED", "1234");
    let settings = ClimatixSettings::load().unwrap();
    assert_eq!(settings.swarm.population, 50);
    assert_eq!(settings.swarm.seed, Some(1234));

    // invalid values are rejected at load time
    std::env::set_var("CLIMATIX_SWARM__ITERATIONS", "0");
    let err = ClimatixSettings::load().unwrap_err();
    assert!(matches!(err, ClimatixError::Config(_)), "err = {}", err);
    std::env::remove_var("CLIMATIX_SWARM__ITERATIONS");

    // inverted bounds fail deserialization
    std::fs::write(&file, "bounds = [[1.0, 0.0]]\n").unwrap();
    assert!(ClimatixSettings::load().is_err());

    std::env::remove_var("CLIMATIX_SWARM__POPULATION");
    std::env::remove_var("CLIMATIX_SWARM__SEED");
    std::env::remove_var(CONFIG_FILE_VAR);
    let _ = std::fs::remove_dir_all(&dir);
}
