use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use slot_engine::domain::bet::BetConfig;
use slot_engine::domain::credits::Credits;
use slot_engine::domain::machine::MachineConfig;
use slot_engine::engine::{spin, GameSession, RandomSource};
use slot_engine::infra::{load_machine_config, DeterministicRng, SystemRng};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Сыграть сессию с балансом и печатью каждого спина
    Play,
    /// Прогнать много спинов без баланса и посчитать RTP
    Simulate,
}

#[derive(Debug, Parser)]
#[command(name = "slot_cli", version)]
#[command(about = "Консольный прогон движка слот-машины")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Play)]
    mode: Mode,

    /// Сколько спинов сделать
    #[arg(long, default_value_t = 10)]
    spins: u64,

    /// Ставка на линию
    #[arg(long, default_value_t = 10)]
    bet: u64,

    /// Количество активных линий
    #[arg(long, default_value_t = 2)]
    lines: usize,

    /// Стартовый баланс (режим play)
    #[arg(long, default_value_t = 1000)]
    balance: u64,

    /// Seed для воспроизводимого прогона; без него — системный RNG
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-конфиг автомата (иначе SLOT_MACHINE_CONFIG или стандартный 3x3)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let machine =
        load_machine_config(args.config.as_deref()).context("не удалось загрузить конфиг автомата")?;
    let bet = BetConfig::new(Credits::new(args.bet), args.lines);
    machine
        .validate_bet(&bet)
        .context("ставка не проходит лимиты автомата")?;

    match args.seed {
        Some(seed) => {
            info!("детерминированный прогон, seed={seed}");
            run(&args, &machine, &bet, &mut DeterministicRng::from_seed(seed))
        }
        None => run(&args, &machine, &bet, &mut SystemRng),
    }
}

fn run<R: RandomSource>(
    args: &Args,
    machine: &MachineConfig,
    bet: &BetConfig,
    rng: &mut R,
) -> Result<()> {
    match args.mode {
        Mode::Play => play(args, machine, bet, rng),
        Mode::Simulate => simulate(args, machine, bet, rng),
    }
}

fn play<R: RandomSource>(
    args: &Args,
    machine: &MachineConfig,
    bet: &BetConfig,
    rng: &mut R,
) -> Result<()> {
    let mut session = GameSession::new(Credits::new(args.balance));

    for _ in 0..args.spins {
        let record = match session.play_spin(machine, bet, rng) {
            Ok(r) => r,
            Err(e) => {
                println!("Спин отклонён: {e}");
                break;
            }
        };

        println!("--- спин #{} ---", record.total_spins);
        print!("{}", record.outcome.grid);
        for win in &record.outcome.line_wins {
            println!("  линия {}: {} → +{}", win.line + 1, win.symbol, win.amount);
        }
        println!(
            "Ставка: {}, выигрыш: {}, баланс: {}",
            record.total_bet, record.outcome.winnings, record.balance
        );
    }

    println!();
    println!("Итог: {} спинов, баланс {}", session.total_spins(), session.balance());
    Ok(())
}

fn simulate<R: RandomSource>(
    args: &Args,
    machine: &MachineConfig,
    bet: &BetConfig,
    rng: &mut R,
) -> Result<()> {
    let total_bet = bet.total_bet()?;

    let mut wagered: u128 = 0;
    let mut returned: u128 = 0;
    let mut hits: u64 = 0;
    let mut max_win = Credits::ZERO;

    for _ in 0..args.spins {
        let outcome = spin(machine, bet, rng)?;
        wagered += u128::from(total_bet.0);
        returned += u128::from(outcome.winnings.0);
        if !outcome.winning_lines.is_empty() {
            hits += 1;
        }
        if outcome.winnings > max_win {
            max_win = outcome.winnings;
        }
    }

    let empirical = if wagered > 0 {
        returned as f64 / wagered as f64
    } else {
        0.0
    };

    println!("=========== SIMULATION SUMMARY ===========");
    println!("Спинов: {}", args.spins);
    println!("Поставлено: {wagered}");
    println!("Выплачено: {returned}");
    println!("Спинов с выигрышем: {hits}");
    println!("Максимальный выигрыш: {max_win}");
    println!("RTP (эмпирический): {:.4}", empirical);
    println!("RTP (теоретический): {:.4}", machine.theoretical_rtp());
    println!("==========================================");
    Ok(())
}
