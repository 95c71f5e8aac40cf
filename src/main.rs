//! Lucid-0 CLI
//!
//! Usage:
//!   lucid0 --encode 42                      # Integer → balanced-ternary code
//!   lucid0 --decode 1TT0T                   # Code → integer
//!   lucid0 --validate TT1T1                 # Guard check, prints true/false
//!   lucid0 --interactive                    # Type integers or codes
//!   lucid0 --spiral                         # Walk the golden-angle spiral
//!   lucid0 --encode 42 --json               # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use lucid0::core::{SpiralConfig, SpiralGenerator, TernaryCodec};
use lucid0::types::{CodeOutput, CoreError, NodeOutput, SpiralPhase};
use lucid0::{CODE_LENGTH, DEFAULT_NODE_COUNT, DEFAULT_SCALE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "lucid0",
    version = VERSION,
    about = "Lucid-0 - Balanced-ternary codes and golden-angle spiral traversal",
    long_about = "Lucid-0 is the reference implementation of the Lucid resonance core.\n\n\
                  It converts signed integers to fixed-width balanced-ternary codes\n\
                  (digits T, 0, 1) and walks a deterministic golden-angle spiral,\n\
                  labelling the cursor with a traversal phase.\n\n\
                  Modes:\n  \
                  --interactive  Codec mode (type integers or codes)\n  \
                  --spiral       Spiral walk mode (Enter advances the cursor)\n\n\
                  Phases:\n  \
                  EMERGENCE   - First quartile, tight inner coils\n  \
                  EXPANSION   - Second quartile, the arms open up\n  \
                  COHERENCE   - Third quartile, settled rotation\n  \
                  DISSOLUTION - Final quartile, approaching wraparound"
)]
struct Args {
    /// Integer to encode as a balanced-ternary code
    #[arg(short, long)]
    encode: Option<i64>,

    /// Code to decode back to an integer
    #[arg(short, long)]
    decode: Option<String>,

    /// Code to validate against the configured length (prints true/false)
    #[arg(long)]
    validate: Option<String>,

    /// Interactive codec mode - type integers or codes
    #[arg(short, long)]
    interactive: bool,

    /// Spiral walk mode - Enter advances, 'seek N' jumps, 'quit' exits
    #[arg(short, long)]
    spiral: bool,

    /// Code width in digits
    #[arg(short, long, default_value_t = CODE_LENGTH)]
    length: usize,

    /// Spiral node count
    #[arg(short, long, default_value_t = DEFAULT_NODE_COUNT)]
    nodes: usize,

    /// Spiral radial scale
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show full field breakdown
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.spiral {
        run_spiral(&args);
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(value) = args.encode {
        run_encode(value, &args);
    } else if let Some(ref code) = args.decode {
        run_decode(code, &args);
    } else if let Some(ref code) = args.validate {
        run_validate(code, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Encode a single value
fn run_encode(value: i64, args: &Args) {
    let codec = TernaryCodec::new();
    match codec.encode(value, args.length) {
        Ok(code) => print_code_output(CodeOutput::new(value, code), args),
        Err(e) => fail(&e, args.no_color),
    }
}

/// Decode a single code
fn run_decode(code: &str, args: &Args) {
    let codec = TernaryCodec::new();
    match codec.decode(code) {
        Ok(value) => {
            // Re-encode at the decoded width so the output record is canonical
            let canonical = codec
                .encode(value, code.chars().count().max(1))
                .expect("decoded value always re-encodes at its own width");
            print_code_output(CodeOutput::new(value, canonical), args);
        }
        Err(e) => fail(&e, args.no_color),
    }
}

/// Validate a single code
fn run_validate(code: &str, args: &Args) {
    let codec = TernaryCodec::new();
    let valid = codec.validate(code, args.length);
    if args.json {
        println!(
            "{}",
            serde_json::json!({ "code": code, "length": args.length, "valid": valid })
        );
    } else {
        println!("{}", valid);
    }
}

/// Run interactive codec mode
fn run_interactive(args: &Args) {
    let codec = TernaryCodec::new();

    print_header("Codec Mode", args.no_color);
    println!("Type an integer to encode, or a {{T,0,1}} code to decode.");
    println!(
        "Width: {} digits, span [-{}, {}]. Type 'quit' to exit.",
        args.length,
        TernaryCodec::max_value(args.length),
        TernaryCodec::max_value(args.length)
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended.");
            break;
        }
        if line.is_empty() {
            continue;
        }

        let result = if let Ok(value) = line.parse::<i64>() {
            codec.encode(value, args.length).map(|code| (value, code))
        } else {
            // Treat anything else as a code; decode names the offending
            // character, re-encode canonicalizes to the configured width
            codec.decode(line).and_then(|value| {
                codec.encode(value, args.length).map(|code| (value, code))
            })
        };

        match result {
            Ok((value, code)) => print_code_output(CodeOutput::new(value, code), args),
            Err(e) => fail_soft(&e, args.no_color),
        }
    }
}

/// Run spiral walk mode
fn run_spiral(args: &Args) {
    let config = SpiralConfig {
        node_count: args.nodes,
        scale: args.scale,
    };
    let mut generator = match SpiralGenerator::new(config) {
        Ok(g) => g,
        Err(e) => {
            fail(&e, args.no_color);
            return;
        }
    };

    print_header("Spiral Mode", args.no_color);
    println!(
        "{} nodes, scale {}. Press Enter to advance, 'seek N' to jump, 'quit' to exit.",
        args.nodes, args.scale
    );
    println!();

    print_node(&generator, args);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt_spiral(&generator, args.no_color);
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended at node {}.", generator.current_index());
            break;
        }

        if let Some(rest) = line.strip_prefix("seek ") {
            match rest.trim().parse::<i64>() {
                Ok(index) => {
                    generator.seek(index);
                }
                Err(_) => {
                    println!("  seek takes an integer, e.g. 'seek -3'");
                    continue;
                }
            }
        } else if line.is_empty() {
            generator.advance();
        } else {
            println!("  Enter advances; 'seek N' jumps; 'quit' exits.");
            continue;
        }

        print_node(&generator, args);
    }
}

/// Print the node under the cursor
fn print_node(generator: &SpiralGenerator, args: &Args) {
    let output = NodeOutput::new(*generator.current(), generator.phase(), generator.len());

    if args.json {
        println!("{}", serde_json::to_string(&output).unwrap());
    } else if args.verbose {
        print_verbose_node(&output, args.no_color);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print a codec output record
fn print_code_output(output: CodeOutput, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string(&output).unwrap());
    } else if args.verbose {
        print_verbose_code(&output, args.no_color);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Lucid-0 v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m╔═════════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║      Lucid-0 v{} - {:<12}       ║\x1b[0m", VERSION, mode);
        println!("\x1b[1m╚═════════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Format spiral mode prompt
fn format_prompt_spiral(generator: &SpiralGenerator, no_color: bool) -> String {
    let phase = generator.phase();
    if no_color {
        format!("[{} {}/{}] > ", phase, generator.current_index(), generator.len())
    } else {
        format!(
            "{}{} [{} {}/{}]{} > ",
            phase.color_code(),
            phase.emoji(),
            phase,
            generator.current_index(),
            generator.len(),
            SpiralPhase::color_reset()
        )
    }
}

/// Print verbose codec output
fn print_verbose_code(output: &CodeOutput, no_color: bool) {
    let color = if no_color { "" } else { "\x1b[32m" };
    let reset = if no_color { "" } else { "\x1b[0m" };

    println!("{}┌──────────────────────────────────────┐{}", color, reset);
    println!("{}│ value:  {:<28} │{}", color, output.value, reset);
    println!("{}│ code:   {:<28} │{}", color, output.code, reset);
    println!("{}│ length: {:<28} │{}", color, output.length, reset);
    println!(
        "{}│ span:   [-{}, {}]{}",
        color,
        TernaryCodec::max_value(output.length),
        TernaryCodec::max_value(output.length),
        reset
    );
    println!("{}└──────────────────────────────────────┘{}", color, reset);
}

/// Print verbose node output
fn print_verbose_node(output: &NodeOutput, no_color: bool) {
    let color = if no_color { "" } else { output.phase.color_code() };
    let reset = if no_color { "" } else { SpiralPhase::color_reset() };
    let node = &output.node;

    println!("{}┌──────────────────────────────────────┐{}", color, reset);
    println!("{}│ node {} of {}{}", color, node.index, output.node_count, reset);
    println!("{}├──────────────────────────────────────┤{}", color, reset);
    println!("{}│   x:              {:>14.6}{}", color, node.x, reset);
    println!("{}│   y:              {:>14.6}{}", color, node.y, reset);
    println!("{}│   theta:          {:>14.6}{}", color, node.theta, reset);
    println!("{}│   radius:         {:>14.6}{}", color, node.radius, reset);
    println!("{}│   phi_n:          {:>14.6}{}", color, node.phi_n, reset);
    println!("{}│   quantum_factor: {:>14.6}{}", color, node.quantum_factor, reset);
    println!("{}├──────────────────────────────────────┤{}", color, reset);
    println!("{}│ Phase: {}{}", color, output.phase, reset);
    println!("{}└──────────────────────────────────────┘{}", color, reset);
}

/// Print an error and exit nonzero (single-shot modes)
fn fail(error: &CoreError, no_color: bool) {
    fail_soft(error, no_color);
    std::process::exit(1);
}

/// Print an error without exiting (interactive modes)
fn fail_soft(error: &CoreError, no_color: bool) {
    if no_color {
        eprintln!("error: {}", error);
    } else {
        eprintln!("\x1b[31m✗ {}\x1b[0m", error);
    }
}
