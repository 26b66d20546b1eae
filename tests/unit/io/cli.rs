//! Tests for argument parsing and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use edgewalk::WalkError;
    use edgewalk::algorithm::walker::RelocationBudget;
    use edgewalk::io::cli::{Cli, FileProcessor, list_masks};
    use edgewalk::io::configuration::{DEFAULT_EDGE_COUNT, DEFAULT_SEED};
    use image::{GrayImage, Luma};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_mask(path: &Path) {
        GrayImage::from_pixel(24, 24, Luma([255]))
            .save(path)
            .expect("png written");
    }

    fn quick_cli(target: &Path, extra: &[&str]) -> Cli {
        let target = target.to_string_lossy().into_owned();
        let mut args = vec![
            "edgewalk",
            target.as_str(),
            "--quiet",
            "--edges",
            "6",
            "--min-reach",
            "2",
            "--max-reach",
            "5",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).expect("arguments parse")
    }

    // Tests defaults when only a target is given
    // Verified by changing the default seed
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["edgewalk", "mask.png"]).expect("arguments parse");
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.edges, DEFAULT_EDGE_COUNT);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.search_limits().relocation_budget, RelocationBudget::WindowArea);
        assert_eq!(cli.log_directive(), "edgewalk=warn");
        assert!(cli.walk_config().validate().is_ok());
    }

    // Tests negative flexibility and budget selection parse
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_walk_arguments() {
        let cli = Cli::try_parse_from([
            "edgewalk",
            "masks",
            "-f",
            "-0.5",
            "--budget",
            "reach-squared",
            "--stall-factor",
            "2",
            "--threshold",
            "40",
            "--invert",
            "-v",
        ])
        .expect("arguments parse");

        assert!((cli.walk_config().flexibility + 0.5).abs() < f64::EPSILON);
        assert_eq!(cli.search_limits().relocation_budget, RelocationBudget::ReachSquared);
        assert_eq!(cli.search_limits().stall_factor, 2);
        assert_eq!(cli.mask_options().threshold, 40);
        assert!(cli.mask_options().invert);
        assert_eq!(cli.log_directive(), "edgewalk=debug");
    }

    // Tests output paths sit next to the input with the edge suffix
    // Verified by keeping the input extension
    #[test]
    fn test_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("art/face.png")),
            PathBuf::from("art/face_edges.csv")
        );
    }

    // Tests a directory batch writes one edge list per PNG
    // Verified by processing only the first file found
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_mask(&temp_dir.path().join("a.png"));
        write_mask(&temp_dir.path().join("b.PNG"));
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").expect("file written");

        let mut processor = FileProcessor::new(quick_cli(temp_dir.path(), &[]));
        processor.process().expect("batch succeeds");

        for name in ["a_edges.csv", "b_edges.csv"] {
            let csv = std::fs::read_to_string(temp_dir.path().join(name)).expect("csv written");
            assert_eq!(csv.lines().count(), 7);
        }
        assert!(!temp_dir.path().join("notes_edges.csv").exists());
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by inverting the skip check
    #[test]
    fn test_skip_existing_output() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = temp_dir.path().join("mask.png");
        let output = temp_dir.path().join("mask_edges.csv");
        write_mask(&input);
        std::fs::write(&output, "sentinel").expect("file written");

        FileProcessor::new(quick_cli(&input, &[]))
            .process()
            .expect("skip succeeds");
        assert_eq!(
            std::fs::read_to_string(&output).expect("csv readable"),
            "sentinel"
        );

        FileProcessor::new(quick_cli(&input, &["--no-skip"]))
            .process()
            .expect("overwrite succeeds");
        assert_ne!(
            std::fs::read_to_string(&output).expect("csv readable"),
            "sentinel"
        );
    }

    // Tests mask listing is sorted and keeps only PNG files
    // Verified by matching the extension case-sensitively
    #[test]
    fn test_list_masks() {
        let temp_dir = TempDir::new().expect("temp dir");
        for name in ["b.png", "a.PNG", "c.txt"] {
            std::fs::write(temp_dir.path().join(name), "").expect("file written");
        }

        let masks = list_masks(temp_dir.path()).expect("directory listed");
        assert_eq!(
            masks,
            vec![temp_dir.path().join("a.PNG"), temp_dir.path().join("b.png")]
        );
    }

    // Tests unreadable directories report their path and the operation
    // Verified by converting through the generic io::Error conversion
    #[test]
    fn test_list_masks_reports_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let missing = temp_dir.path().join("absent");

        match list_masks(&missing) {
            Err(WalkError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read directory");
            }
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests invalid parameters fail before any file is read
    // Verified by validating per file after loading
    #[test]
    fn test_invalid_config_fails_early() {
        let temp_dir = TempDir::new().expect("temp dir");
        let target = temp_dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "edgewalk",
            target.as_str(),
            "--quiet",
            "--min-reach",
            "9",
            "--max-reach",
            "3",
        ])
        .expect("arguments parse");

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(WalkError::InvalidConfiguration {
                parameter: "max_reach",
                ..
            })
        ));
    }

    // Tests non-PNG targets are rejected
    // Verified by accepting any existing file
    #[test]
    fn test_non_png_target_rejected() {
        let temp_dir = TempDir::new().expect("temp dir");
        let target = temp_dir.path().join("mask.jpg");
        std::fs::write(&target, "not an image").expect("file written");

        assert!(FileProcessor::new(quick_cli(&target, &[])).process().is_err());
    }
}
