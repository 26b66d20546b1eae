//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use edgewalk::WalkError;
    use edgewalk::io::error::{invalid_configuration, invalid_sequence, io_error};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests configuration errors name the parameter, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_configuration_display() {
        let err = invalid_configuration("flexibility", &1.5, &"must lie strictly between -1 and 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'flexibility' = '1.5': must lie strictly between -1 and 1"
        );
        assert!(err.source().is_none());
    }

    // Tests walk failure messages carry their counts
    // Verified by swapping produced and requested counts
    #[test]
    fn test_walk_failure_display() {
        let insufficient = WalkError::InsufficientPoints {
            requested: 10,
            available: 3,
        };
        assert_eq!(
            insufficient.to_string(),
            "Feature map has 3 eligible points, cannot produce 10 edges"
        );

        let exhausted = WalkError::SearchExhausted {
            edges_produced: 4,
            requested: 9,
            relocations: 12,
        };
        assert_eq!(
            exhausted.to_string(),
            "Search exhausted after 4/9 edges (12 relocations)"
        );

        let interrupted = WalkError::Interrupted { edges_produced: 2 };
        assert_eq!(interrupted.to_string(), "Walk interrupted after 2 edges");

        let sequence = invalid_sequence(3, &"bad continuity");
        assert_eq!(
            sequence.to_string(),
            "Invalid edge sequence at edge 3: bad continuity"
        );
    }

    // Tests wrapped errors are exposed through source()
    // Verified by returning None for file system errors
    #[test]
    fn test_file_system_error_source() {
        let err = WalkError::FileSystem {
            path: PathBuf::from("out/edges.csv"),
            operation: "write edge list",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "File system error during write edge list on 'out/edges.csv': denied"
        );
    }

    // Tests the path helper reports a configuration error
    // Verified by mapping it to a file system error
    #[test]
    fn test_io_error_helper() {
        match io_error("Target must be a PNG file or directory") {
            WalkError::InvalidConfiguration {
                parameter, reason, ..
            } => {
                assert_eq!(parameter, "path");
                assert_eq!(reason, "Target must be a PNG file or directory");
            }
            other => panic!("Expected InvalidConfiguration, got {other:?}"),
        }
    }

    // Tests invalid source data messages
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_source_data_display() {
        let err = WalkError::InvalidSourceData {
            reason: "empty mask".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid source data: empty mask");
    }
}
