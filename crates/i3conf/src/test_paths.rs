#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use crate::{CONFIG_FILE, Error, TEMPLATE_FILE, config_dir, default_template_path, resolve};

    #[test]
    fn defaults_live_under_dot_config() {
        let dir = config_dir(Path::new("/home/me"));
        assert_eq!(
            dir.join(CONFIG_FILE).to_str(),
            Some("/home/me/.config/i3-dynamic-conf/config.yaml")
        );
        assert!(default_template_path().ends_with(".config/i3-dynamic-conf/template"));
    }

    #[test]
    fn missing_default_is_read_error_naming_it() {
        let home = TempDir::new().unwrap();
        let default = config_dir(home.path()).join(CONFIG_FILE);

        let err = resolve(None, default.clone(), "spec").unwrap_err();
        match err {
            Error::Read {
                path: Some(ref p),
                ref message,
            } => {
                assert_eq!(p, &default);
                assert!(message.contains(&default.display().to_string()));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn existing_default_is_used() {
        let home = TempDir::new().unwrap();
        let dir = config_dir(home.path());
        fs::create_dir_all(&dir).unwrap();
        let default = dir.join(TEMPLATE_FILE);
        fs::write(&default, "{{MODE_x}}").unwrap();

        assert_eq!(resolve(None, default.clone(), "template").unwrap(), default);
    }

    #[test]
    fn explicit_path_skips_default() {
        let home = TempDir::new().unwrap();
        let default = config_dir(home.path()).join(CONFIG_FILE);
        let explicit = home.path().join("elsewhere.yaml");
        assert_eq!(resolve(Some(explicit.as_path()), default, "spec").unwrap(), explicit);
    }
}
