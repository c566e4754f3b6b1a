//! CLI command parsing and pipeline tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`) and the
//! parse → optimize → emit pipeline the commands drive.

// The CLI is a binary crate, so clap parsing is validated on a mirror of
// its command structs, and the pipeline is exercised through the
// underlying library crates.

// ============================================================================
// Clap argument parsing
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "alsvid")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Optimize {
            #[arg(short, long)]
            input: String,
            #[arg(short, long)]
            output: Option<String>,
            #[arg(long)]
            report: Option<String>,
        },
        Check {
            #[arg(short, long)]
            input: String,
        },
        Version,
    }

    // --- Optimize command ---

    #[test]
    fn test_parse_optimize_minimal() {
        let cli = TestCli::try_parse_from(["alsvid", "optimize", "-i", "circuit.qasm"]).unwrap();
        match cli.command {
            TestCommands::Optimize {
                input,
                output,
                report,
            } => {
                assert_eq!(input, "circuit.qasm");
                assert!(output.is_none());
                assert!(report.is_none());
            }
            _ => panic!("Expected Optimize command"),
        }
    }

    #[test]
    fn test_parse_optimize_with_all_args() {
        let cli = TestCli::try_parse_from([
            "alsvid",
            "optimize",
            "-i",
            "in.qasm",
            "-o",
            "out.qasm",
            "--report",
            "report.json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Optimize {
                input,
                output,
                report,
            } => {
                assert_eq!(input, "in.qasm");
                assert_eq!(output.unwrap(), "out.qasm");
                assert_eq!(report.unwrap(), "report.json");
            }
            _ => panic!("Expected Optimize command"),
        }
    }

    #[test]
    fn test_parse_optimize_stdin() {
        let cli = TestCli::try_parse_from(["alsvid", "optimize", "-i", "-"]).unwrap();
        match cli.command {
            TestCommands::Optimize { input, .. } => assert_eq!(input, "-"),
            _ => panic!("Expected Optimize command"),
        }
    }

    #[test]
    fn test_parse_optimize_missing_input() {
        let result = TestCli::try_parse_from(["alsvid", "optimize"]);
        assert!(result.is_err());
    }

    // --- Check command ---

    #[test]
    fn test_parse_check() {
        let cli = TestCli::try_parse_from(["alsvid", "check", "-i", "circuit.qasm"]).unwrap();
        match cli.command {
            TestCommands::Check { input } => assert_eq!(input, "circuit.qasm"),
            _ => panic!("Expected Check command"),
        }
    }

    // --- Version ---

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["alsvid", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    // --- Verbose flag ---

    #[test]
    fn test_parse_verbose_flag() {
        let cli = TestCli::try_parse_from(["alsvid", "-v", "version"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_verbose_vvv() {
        let cli = TestCli::try_parse_from(["alsvid", "-vvv", "version"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    // --- Error cases ---

    #[test]
    fn test_no_subcommand() {
        let result = TestCli::try_parse_from(["alsvid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        let result = TestCli::try_parse_from(["alsvid", "frobnicate"]);
        assert!(result.is_err());
    }
}

// ============================================================================
// Circuit loading
// ============================================================================

mod circuit_loading {
    use alsvid_qasm::parse;
    use std::fs;

    #[test]
    fn test_parse_valid_assembly() {
        let source = "qubit a\nqubit b\nCNOT a,b\n";
        let circuit = parse(source).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
    }

    #[test]
    fn test_parse_invalid_assembly() {
        let result = parse("this is not a circuit!");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_circuit_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.qasm");
        fs::write(&path, "qubit a\nqubit b\nCNOT a,b\nH a\n").unwrap();

        let source = fs::read_to_string(&path).unwrap();
        let circuit = parse(&source).unwrap();
        assert_eq!(circuit.num_gates(), 2);
    }
}

// ============================================================================
// Pipeline: parse → optimize → emit
// ============================================================================

mod pipeline {
    use alsvid_opt::optimize;
    use alsvid_qasm::{emit, parse};
    use std::fs;

    #[test]
    fn test_cancellation_end_to_end() {
        let circuit = parse("qubit a\nqubit b\nCNOT a,b\nCNOT a,b\n").unwrap();
        let (optimized, _) = optimize(&circuit);
        assert_eq!(emit(&optimized), "qubit a\nqubit b\n");
    }

    #[test]
    fn test_swap_fold_end_to_end() {
        let source = "qubit a\nqubit b\nCNOT a,b\nCNOT b,a\nCNOT a,b\nH a\n";
        let circuit = parse(source).unwrap();
        let (optimized, _) = optimize(&circuit);
        assert_eq!(emit(&optimized), "qubit a\nqubit b\n\nH b\n");
    }

    #[test]
    fn test_optimized_file_reparses() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.qasm");
        let output = dir.path().join("out.qasm");
        fs::write(
            &input,
            "qubit q0\nqubit q1\nqubit q2\ncbit m\nTof q0,q1,q2\nTof q0,q1,q2\nCNOT q0,q1\nmeasure q0\n",
        )
        .unwrap();

        let circuit = parse(&fs::read_to_string(&input).unwrap()).unwrap();
        let (optimized, _) = optimize(&circuit);
        fs::write(&output, emit(&optimized)).unwrap();

        let reparsed = parse(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(reparsed.num_gates(), 2); // Toffoli pair cancelled
        assert_eq!(reparsed.bits(), circuit.bits());
    }

    #[test]
    fn test_rerun_is_fixed_point() {
        let source = "qubit a\nqubit b\nCNOT a,b\nH a\nCNOT a,b\n";
        let circuit = parse(source).unwrap();
        let (once, _) = optimize(&circuit);
        let first = emit(&once);

        let (twice, _) = optimize(&parse(&first).unwrap());
        assert_eq!(emit(&twice), first);
    }
}
