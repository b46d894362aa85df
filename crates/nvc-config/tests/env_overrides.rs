use figment::Jail;
use nvc_config::{ConfigError, NvcConfig};
use pretty_assertions::assert_eq;

#[test]
fn env_overrides_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("NVCELL_TOOLCHAIN__COMPILER", "/opt/stub/nvcc");
        jail.set_env("NVCELL_WORKSPACE__STATIC_DIR", "true");
        jail.set_env("NVCELL_TIMING__REPEAT", "3");

        let config = NvcConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.toolchain.compiler, "/opt/stub/nvcc");
        assert!(config.workspace.static_dir);
        assert_eq!(config.timing.repeat, 3);
        Ok(())
    });
}

#[test]
fn project_file_is_layered_over_defaults() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".nvcell")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".nvcell/config.toml",
            r#"
                [workspace]
                static_dir = true
                relative_dir = "cuda"

                [toolchain]
                out = "kernel.bin"
                timeout_secs = 15
            "#,
        )?;

        let config = NvcConfig::load_from(jail.directory()).expect("config loads");
        assert!(config.workspace.static_dir);
        assert_eq!(config.workspace.relative_dir, "cuda");
        assert_eq!(config.toolchain.out, "kernel.bin");
        assert_eq!(config.toolchain.timeout_secs, 15);
        assert_eq!(config.timing.number, 1);
        Ok(())
    });
}

#[test]
fn process_env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".nvcell")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".nvcell/config.toml",
            r#"
                [toolchain]
                out = "from_file.bin"
            "#,
        )?;
        jail.set_env("NVCELL_TOOLCHAIN__OUT", "from_env.bin");

        let config = NvcConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.toolchain.out, "from_env.bin");
        Ok(())
    });
}

#[test]
fn invalid_values_are_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("NVCELL_TIMING__NUMBER", "0");

        let err = NvcConfig::load_from(jail.directory()).expect_err("number 0 should fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
