// src/cli.rs
use std::error::Error;
use std::io::Write;

use crate::config::options::{AppOptions, EliminationSort, TeamSort};
use crate::config::state::AppState;
use crate::model::{Elimination, Team, Title};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Teams(TeamCmd),
    Elims(ElimCmd),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamCmd {
    List(Option<TeamSort>),
    Search(String),
    Show(String),
    Stats,
    Add(String),
    Remove(String),
    AddTitle { name: String, year: i32, goals: u32 },
    RemoveTitle { name: String, year: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElimCmd {
    List(Option<EliminationSort>),
    Search(String),
    Show(usize),
    Peek,
    Push(Elimination),
    Pop,
    Remove(Elimination),
}

const HELP: &str = include_str!("cli_help.txt");

pub struct Invocation {
    pub options: AppOptions,
    pub command: Command,
}

/// Parse, load the dataset the command touches, run it, print to stdout.
/// Help goes to stdout as well.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<(), Box<dyn Error>> {
    let inv = parse_args(args)?;
    if inv.command == Command::Help {
        println!("{}", HELP);
        return Ok(());
    }

    // Logging is best-effort; a missing directory only means no log file.
    let _ = crate::file::ensure_parent(&inv.options.log_path);
    crate::log::init(&inv.options.log_path);
    let mut state = AppState::new(inv.options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut state, &inv.command, &mut out).inspect_err(|e| loge!("{e}"))
}

/* ---------------- Parsing ---------------- */

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Invocation, Box<dyn Error>> {
    let mut options = AppOptions::default();
    let mut sort: Option<String> = None;
    let mut desc = s!();
    let mut image = s!();
    let mut pos: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--champions" => options.data.set_champions(&args.next().ok_or("Missing value for --champions")?)?,
            "--eliminations" => options.data.set_eliminations(&args.next().ok_or("Missing value for --eliminations")?)?,
            "--log" => options.log_path = args.next().ok_or("Missing value for --log")?.into(),
            "--sort" => sort = Some(args.next().ok_or("Missing value for --sort")?),
            "--desc" => desc = args.next().ok_or("Missing value for --desc")?,
            "--image" => image = args.next().ok_or("Missing value for --image")?,
            "-h" | "--help" => return Ok(Invocation { options, command: Command::Help }),
            other if other.starts_with("--") => fail!("Unknown arg: {}", other),
            _ => pos.push(a),
        }
    }

    let mut pos = pos.into_iter();
    let dataset = match pos.next() {
        Some(d) => d,
        None => return Ok(Invocation { options, command: Command::Help }),
    };
    let cmd = pos.next().unwrap_or_else(|| s!("list"));
    let rest: Vec<String> = pos.collect();

    let command = match dataset.to_ascii_lowercase().as_str() {
        "teams" | "champions" => {
            if let Some(s) = &sort { options.team_sort = s.parse()?; }
            Command::Teams(parse_team_cmd(&cmd, &rest, sort.is_some().then_some(options.team_sort))?)
        }
        "elims" | "eliminations" => {
            if let Some(s) = &sort { options.elimination_sort = s.parse()?; }
            let cmd = match parse_elim_cmd(&cmd, &rest, sort.is_some().then_some(options.elimination_sort))? {
                ElimCmd::Push(e) => ElimCmd::Push(e.with_description(&desc).with_image(&image)),
                other => other,
            };
            Command::Elims(cmd)
        }
        other => fail!("Unknown dataset: {} (expected teams or elims)", other),
    };

    Ok(Invocation { options, command })
}

fn arg<'a>(rest: &'a [String], i: usize, what: &str) -> Result<&'a str, Box<dyn Error>> {
    rest.get(i).map(String::as_str).ok_or_else(|| format!("Missing {}", what).into())
}

fn expect_args(cmd: &str, rest: &[String], n: usize) -> Result<(), Box<dyn Error>> {
    if rest.len() > n {
        fail!("Too many arguments for {}: {}", cmd, rest[n..].join(" "));
    }
    Ok(())
}

fn parse_team_cmd(cmd: &str, rest: &[String], sort: Option<TeamSort>) -> Result<TeamCmd, Box<dyn Error>> {
    let c = match cmd {
        "list" => { expect_args(cmd, rest, 0)?; TeamCmd::List(sort) }
        "search" => TeamCmd::Search(rest.join(" ")),
        "show" => TeamCmd::Show(arg(rest, 0, "team name")?.into()),
        "stats" => { expect_args(cmd, rest, 0)?; TeamCmd::Stats }
        "add" => TeamCmd::Add(arg(rest, 0, "team name")?.into()),
        "remove" => TeamCmd::Remove(arg(rest, 0, "team name")?.into()),
        "add-title" => {
            expect_args(cmd, rest, 3)?;
            TeamCmd::AddTitle {
                name: arg(rest, 0, "team name")?.into(),
                year: arg(rest, 1, "year")?.parse()?,
                goals: arg(rest, 2, "top scorer goals")?.parse()?,
            }
        }
        "remove-title" => {
            expect_args(cmd, rest, 2)?;
            TeamCmd::RemoveTitle {
                name: arg(rest, 0, "team name")?.into(),
                year: arg(rest, 1, "year")?.parse()?,
            }
        }
        other => fail!("Unknown teams command: {}", other),
    };
    Ok(c)
}

fn parse_elim_cmd(cmd: &str, rest: &[String], sort: Option<EliminationSort>) -> Result<ElimCmd, Box<dyn Error>> {
    let c = match cmd {
        "list" => { expect_args(cmd, rest, 0)?; ElimCmd::List(sort) }
        "search" => ElimCmd::Search(rest.join(" ")),
        "show" => ElimCmd::Show(parse_index(arg(rest, 0, "index")?)?),
        "peek" => ElimCmd::Peek,
        "pop" => ElimCmd::Pop,
        "push" => {
            expect_args(cmd, rest, 5)?;
            ElimCmd::Push(Elimination::new(
                arg(rest, 0, "season")?,
                arg(rest, 1, "phase")?,
                arg(rest, 2, "opponent")?,
                arg(rest, 3, "first leg result")?,
                arg(rest, 4, "second leg result")?,
            ))
        }
        "remove" => {
            expect_args(cmd, rest, 3)?;
            ElimCmd::Remove(Elimination::new(
                arg(rest, 0, "season")?,
                arg(rest, 1, "phase")?,
                arg(rest, 2, "opponent")?,
                "",
                "",
            ))
        }
        other => fail!("Unknown elims command: {}", other),
    };
    Ok(c)
}

/// Row index from the command line. Negative values are rejected here so the
/// models only ever see valid `usize` indices.
fn parse_index(s: &str) -> Result<usize, Box<dyn Error>> {
    let v: i64 = s.trim().parse()?;
    if v < 0 { fail!("Index must be 0 or greater: {}", v); }
    Ok(usize::try_from(v)?)
}

/* ---------------- Execution ---------------- */

pub fn execute<W: Write>(state: &mut AppState, command: &Command, out: &mut W) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Help => { writeln!(out, "{}", HELP)?; }
        Command::Teams(c) => {
            state.load_champions()?;
            run_team_cmd(state, c, out)?;
        }
        Command::Elims(c) => {
            state.load_eliminations()?;
            run_elim_cmd(state, c, out)?;
        }
    }
    Ok(())
}

fn run_team_cmd<W: Write>(state: &mut AppState, cmd: &TeamCmd, out: &mut W) -> Result<(), Box<dyn Error>> {
    let model = &mut state.champions;
    match cmd {
        TeamCmd::List(sort) => {
            if let Some(by) = sort { model.sort(*by); }
            for (i, t) in model.iter().enumerate() { write_team_row(out, i, t)?; }
        }
        TeamCmd::Search(term) => {
            let hits = model.search(term);
            if hits.is_empty() { writeln!(out, "No teams match \"{}\"", term)?; }
            for (i, t) in hits.iter().enumerate() { write_team_row(out, i, t)?; }
        }
        TeamCmd::Show(name) => {
            let team = model.team_by_name(name).ok_or_else(|| format!("No team named {}", name))?;
            write_team_details(out, team)?;
            let nav = &mut state.team_nav;
            if let Some(ix) = model.iter().position(|t| t == team) {
                nav.select(ix);
            }
            if let (Some(p), Some(n)) = (nav.peek_prev(), nav.peek_next()) {
                if let (Ok(pt), Ok(nt)) = (model.team_at(p), model.team_at(n)) {
                    writeln!(out, "prev [{}]: {}", p, pt.name)?;
                    writeln!(out, "next [{}]: {}", n, nt.name)?;
                }
            }
        }
        TeamCmd::Stats => { writeln!(out, "{}", model.statistics())?; }
        TeamCmd::Add(name) => {
            model.add_team(Team::new(name))?;
            model.save()?;
            writeln!(out, "Added {}", name)?;
        }
        TeamCmd::Remove(name) => {
            let removed = model.remove_team(name).ok_or_else(|| format!("No team named {}", name))?;
            model.save()?;
            writeln!(out, "Removed {}", removed.name)?;
        }
        TeamCmd::AddTitle { name, year, goals } => {
            model.add_title_to_team(name, Title::new(*year, *goals))?;
            model.save()?;
            writeln!(out, "Added {} title to {}", year, name)?;
        }
        TeamCmd::RemoveTitle { name, year } => {
            model.remove_title_from_team(name, *year)?;
            model.save()?;
            writeln!(out, "Removed {} title from {}", year, name)?;
        }
    }
    state.refresh_navigation();
    Ok(())
}

fn run_elim_cmd<W: Write>(state: &mut AppState, cmd: &ElimCmd, out: &mut W) -> Result<(), Box<dyn Error>> {
    let model = &mut state.eliminations;
    match cmd {
        ElimCmd::List(sort) => {
            let rows = match sort { Some(by) => model.sorted(*by), None => model.all() };
            for (i, e) in rows.iter().enumerate() { write_elim_row(out, i, e)?; }
        }
        ElimCmd::Search(term) => {
            let hits = model.search(term);
            if hits.is_empty() { writeln!(out, "No eliminations match \"{}\"", term)?; }
            for (i, e) in hits.iter().enumerate() { write_elim_row(out, i, e)?; }
        }
        ElimCmd::Show(index) => {
            let nav = &mut state.elim_nav;
            nav.select(*index)
                .ok_or_else(|| format!("Index {} out of range (0..{})", index, model.len()))?;
            if let Some(e) = model.get(*index) { write_elim_details(out, e)?; }
            // Neighbours wrap around, like the previous/next buttons.
            if let (Some(p), Some(n)) = (nav.peek_prev(), nav.peek_next()) {
                if let (Some(pe), Some(ne)) = (model.get(p), model.get(n)) {
                    writeln!(out, "prev [{}]: {} {}", p, pe.season, pe.opponent)?;
                    writeln!(out, "next [{}]: {} {}", n, ne.season, ne.opponent)?;
                }
            }
        }
        ElimCmd::Peek => match model.peek() {
            Some(e) => write_elim_details(out, e)?,
            None => writeln!(out, "No eliminations")?,
        },
        ElimCmd::Push(e) => {
            model.push(e.clone());
            model.save()?;
            writeln!(out, "Pushed {} {} vs {}", e.season, e.phase, e.opponent)?;
        }
        ElimCmd::Pop => match model.pop() {
            Some(e) => {
                model.save()?;
                writeln!(out, "Popped {} {} vs {}", e.season, e.phase, e.opponent)?;
            }
            None => writeln!(out, "No eliminations")?,
        },
        ElimCmd::Remove(key) => {
            if !model.remove(key) {
                fail!("No elimination {} {} vs {}", key.season, key.phase, key.opponent);
            }
            model.save()?;
            writeln!(out, "Removed {} {} vs {}", key.season, key.phase, key.opponent)?;
        }
    }
    state.refresh_navigation();
    Ok(())
}

/* ---------------- Output ---------------- */

fn write_team_row<W: Write>(out: &mut W, i: usize, t: &Team) -> std::io::Result<()> {
    match t.latest_title() {
        Some(latest) => writeln!(out, "{:>3}. {} ({} titles, latest {})", i, t.name, t.title_count(), latest.year),
        None => writeln!(out, "{:>3}. {} (0 titles)", i, t.name),
    }
}

fn write_team_details<W: Write>(out: &mut W, t: &Team) -> std::io::Result<()> {
    writeln!(out, "{}", t.name)?;
    writeln!(out, "Titles: {}", t.title_count())?;
    for title in &t.titles {
        writeln!(out, "  {}  top scorer goals: {}", title.year, title.top_scorer_goals)?;
    }
    Ok(())
}

fn write_elim_row<W: Write>(out: &mut W, i: usize, e: &Elimination) -> std::io::Result<()> {
    writeln!(out, "{:>3}. {} {} vs {} ({})", i, e.season, e.phase, e.opponent, e.aggregate())
}

fn write_elim_details<W: Write>(out: &mut W, e: &Elimination) -> std::io::Result<()> {
    writeln!(out, "{} - {}", e.season, e.phase)?;
    writeln!(out, "Opponent: {}", e.opponent)?;
    writeln!(out, "Legs: {}", e.aggregate())?;
    if !e.description.is_empty() { writeln!(out, "{}", e.description)?; }
    if !e.image_path.is_empty() { writeln!(out, "Image: {}", e.image_path)?; }
    Ok(())
}
