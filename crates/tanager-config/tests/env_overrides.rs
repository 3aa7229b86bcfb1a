use std::path::PathBuf;

use figment::Jail;
use tanager_config::TanagerConfig;

/// Point the user-global config lookup at the jail so a real
/// `~/.config/tanager/config.toml` cannot leak into assertions.
fn isolate_user_config(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
}

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("TANAGER_SERVER__PORT", "9100");
        jail.set_env("TANAGER_DATA__DISTRIBUTION_FILE", "/tmp/sample.tsv");

        let config = TanagerConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9100);
        assert_eq!(
            config.data.distribution_file,
            Some(PathBuf::from("/tmp/sample.tsv"))
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "tanager.toml",
            r"
[slider]
mark_budget = 5
",
        )?;
        jail.set_env("TANAGER_SLIDER__MARK_BUDGET", "12");

        let config = TanagerConfig::load().expect("config loads");
        assert_eq!(config.slider.mark_budget, 12);
        Ok(())
    });
}

#[test]
fn invalid_port_from_env_is_an_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("TANAGER_SERVER__PORT", "not-a-port");
        assert!(TanagerConfig::load().is_err());
        Ok(())
    });
}
