use std::path::PathBuf;

/// Process-level options. The session settings themselves are always
/// prompted for, never passed as flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub sounds_dir: PathBuf,
    pub sound: bool,
}

impl Settings {
    pub fn from_args(args: &[String]) -> Self {
        let has = |flag: &str| args.iter().any(|a| a == flag);
        let value_of = |long: &str, short: Option<&str>| {
            args.iter()
                .position(|a| a == long || Some(a.as_str()) == short)
                .and_then(|pos| args.get(pos + 1))
                .map(PathBuf::from)
        };

        let verbose = has("--verbose") || has("-v");

        // Nothing is written to disk unless a log path is asked for.
        let log_file = value_of("--log", Some("-l"));

        let sounds_dir = value_of("--sounds", None).unwrap_or_else(|| PathBuf::from("."));

        Self {
            verbose,
            log_file,
            sounds_dir,
            sound: !has("--no-sound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pomodoro_timer")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_args(&args(&[]));

        assert!(!settings.verbose);
        assert!(settings.sound);
        assert_eq!(settings.sounds_dir, PathBuf::from("."));
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_flags() {
        let settings = Settings::from_args(&args(&[
            "-v",
            "-l",
            "/tmp/p.log",
            "--sounds",
            "/opt/sounds",
            "--no-sound",
        ]));

        assert!(settings.verbose);
        assert!(!settings.sound);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/p.log")));
        assert_eq!(settings.sounds_dir, PathBuf::from("/opt/sounds"));
    }

    #[test]
    fn test_log_needs_a_path() {
        assert_eq!(Settings::from_args(&args(&["--log"])).log_file, None);
        assert_eq!(
            Settings::from_args(&args(&["--log", "activity.log"])).log_file,
            Some(PathBuf::from("activity.log"))
        );
    }
}
