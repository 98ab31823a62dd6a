//! CLI driver for Shor's factoring algorithm, grounded in
//! `examples/original_source/main.cc`'s `main()`.
//!
//! Mirrors the C++ driver's flow: even/prime/prime-power short-circuits,
//! a random witness `x` with `gcd(M, x) != 1` short-circuit, register
//! construction, `ModExp`, `QFT`, measurement, bit-reversal,
//! `PeriodExtract`, and the final even-period GCD step — but expressed as
//! calls into the library crate instead of inline arithmetic, and with
//! `Result`-based error propagation instead of `assert`/`exit`.

use clap::Parser;
use tracing::info;

use shor_sim::{
    error::SimError,
    math::{bit_reverse, count_bits, gcd, is_prime, is_prime_power, modexp},
    operator::{first_register_width, mod_exp, qft},
    postproc::period_extract,
    register::QReg,
};

/// Factor a composite integer using a simulated run of Shor's algorithm.
#[derive(Parser, Debug)]
#[command(name = "shor-sim", version, about)]
struct Args {
    /// The number to factor.
    modulus: usize,

    /// Witness value in 1..modulus. Picked by the caller, as in the
    /// original driver's "usually this is taken randomly" prompt; if
    /// omitted, the smallest x > 1 coprime to modulus is used.
    #[arg(short = 'x', long)]
    witness: Option<usize>,

    /// RNG seed pair (both 0 falls back to a time-derived seed).
    #[arg(long, default_value_t = 0)]
    seed1: u32,
    #[arg(long, default_value_t = 0)]
    seed2: u32,

    /// Print per-register qubit-count and state-space diagnostics.
    #[arg(short = 'd', long)]
    diagnostics: bool,
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let Args {
        modulus,
        witness,
        seed1,
        seed2,
        diagnostics,
    } = args;

    if modulus % 2 == 0 {
        println!("The number is even. Factors found");
        println!("{modulus} = 2 * {}", modulus / 2);
        return Ok(());
    }
    if is_prime(modulus) {
        println!("The number is prime. You cannot factor a prime number.");
        return Ok(());
    }
    if is_prime_power(modulus) {
        println!("The number is a prime power. It cannot be factored.");
        return Ok(());
    }

    let x = witness.unwrap_or_else(|| (2..modulus).find(|&c| gcd(c, modulus) == 1).unwrap_or(1));

    let classical_factor = gcd(modulus, x);
    if classical_factor != 1 && classical_factor != modulus {
        println!("Factor found since gcd({modulus}, {x}) = {classical_factor}");
        println!("{modulus} = {classical_factor} * {}", modulus / classical_factor);
        return Ok(());
    }

    let first = first_register_width(modulus);
    let first_width = 1usize << first;
    let bits = first + count_bits(modulus);

    info!(bits, first, "preparing equal superposition in first register");
    let mut reg = QReg::with_uniform_prefix_and_seed(bits, first, seed1, seed2)?;

    if diagnostics {
        println!("Used {bits} qubits ({} amplitudes) to factor {modulus}.", 1usize << bits);
    }

    mod_exp(&mut reg, x, modulus, first)?;
    info!("modular exponentiation applied");

    for k in first..bits {
        reg.measure_qubit(k)?;
    }

    info!("running Fourier transform on the first register");
    qft(&mut reg, first)?;

    let measured = reg.measure();
    println!("Measured state is: {measured}");

    let mut result = measured % first_width;
    result = bit_reverse(result, first);

    println!("The result is {result}");
    println!("Fourier domain is {first_width}");

    let period = period_extract(result as isize, modulus as isize, first_width as isize);
    println!("Period guess is: {period}");

    if period != 0 && modexp(x, period as usize, modulus) == 1 {
        println!("Period guess is probably correct");
    } else {
        println!("Period guess is incorrect.");
        println!("Try this algorithm again with the same starting number");
        return Ok(());
    }

    if period % 2 == 0 {
        let candidate = modexp(x, period as usize / 2, modulus);
        let factor = gcd(candidate + 1, modulus);
        if factor != 1 && factor != modulus {
            println!("Factors found!");
            println!("{modulus} = {factor} * {}", modulus / factor);
        } else if factor == 1 {
            println!("Procedure failed due to bad period guess");
        } else {
            println!("Procedure failed since {x}^{} mod {modulus} == -1", period / 2);
            println!("Try again with another number");
        }
    } else {
        println!("Procedure failed; period is odd");
    }

    Ok(())
}
