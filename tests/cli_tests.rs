#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use synthtuner::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["synthtuner"]);
        assert_eq!(args.client_pattern(), "");
        assert_eq!(args.port_pattern(), "*");
        assert_eq!(args.tuning, None);
        assert!(!args.list);
        assert_eq!(args.log_level(), LevelFilter::Info);

        let config = TunerConfig::from_args(&args).unwrap();
        assert_eq!(config.tuning.offsets(), &[0.0; 12]);
        assert_eq!(config.criteria.client.as_str(), "");
        assert_eq!(config.criteria.port.as_str(), "*");
        assert_eq!(config.session_name, "synthtuner");
        assert!(!config.list_only);
    }

    #[test]
    fn test_multi_word_patterns_are_joined() {
        let args = Args::parse_from([
            "synthtuner",
            "--client",
            "Midi",
            "Through",
            "--port",
            "Midi",
            "Through",
            "Port-*",
        ]);
        assert_eq!(args.client_pattern(), "Midi Through");
        assert_eq!(args.port_pattern(), "Midi Through Port-*");
    }

    #[test]
    fn test_twelve_tunings_with_negative_values() {
        let args = Args::parse_from([
            "synthtuner", "--tuning", "0", "-0.5", "0.25", "-1", "1", "0", "0", "0", "0", "0",
            "0", "-0.125",
        ]);
        let tuning = args.tuning.as_deref().unwrap();
        assert_eq!(tuning.len(), 12);
        assert_eq!(tuning[1], -0.5);
        assert_eq!(tuning[11], -0.125);

        let config = TunerConfig::from_args(&args).unwrap();
        assert_eq!(config.tuning.offsets()[3], -1.0);
    }

    #[test]
    fn test_wrong_tuning_count_is_a_usage_error() {
        let too_few = Args::try_parse_from(["synthtuner", "--tuning", "0", "0", "0"]);
        assert!(too_few.is_err());

        let mut too_many = vec!["synthtuner", "--tuning"];
        too_many.extend(["0"; 13]);
        assert!(Args::try_parse_from(too_many).is_err());

        let err = Args::try_parse_from(["synthtuner", "--tuning", "zero"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_list_and_verbosity() {
        let args = Args::parse_from(["synthtuner", "--list", "-vv"]);
        assert!(args.list);
        assert_eq!(args.log_level(), LevelFilter::Trace);
        assert!(TunerConfig::from_args(&args).unwrap().list_only);
    }

    #[test]
    fn test_wrong_tuning_count_from_library_args_is_rejected() {
        let mut args = Args::parse_from(["synthtuner", "--client", "*"]);
        args.tuning = Some(vec![0.5; 5]);

        let err = TunerConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, TunerError::TuningCount(5)));
        assert_eq!(err.exit_code(), 2);

        args.tuning = Some(vec![0.5; 12]);
        assert_eq!(TunerConfig::from_args(&args).unwrap().tuning.offsets(), &[0.5; 12]);
    }

    #[test]
    fn test_repeated_stars_are_accepted_in_patterns() {
        let args = Args::parse_from(["synthtuner", "--client", "Fluid**", "--port", "**Synth"]);
        let config = TunerConfig::from_args(&args).unwrap();
        assert!(config.criteria.client.matches("FluidSynth"));
        assert!(config.criteria.port.matches("Synth"));
    }

    #[test]
    fn test_invalid_pattern_is_an_argument_error() {
        let args = Args::parse_from(["synthtuner", "--port", "[in"]);
        let err = TunerConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, TunerError::InvalidPattern { flag: "port", .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
