#[macro_use]
extern crate anyhow;

use clap::{App, Arg};
use log::info;
use prettytable::Cell;
use prettytable::Row;
use prettytable::Table;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use rustyline_derive::{Helper, Highlighter, Hinter, Validator};
use simplelog::{LevelFilter, SimpleLogger, TermLogger};
use std::path::Path;
use transitroute_core::util::example_graphs::london_underground;
use transitroute_core::{Graph, Journey, RoutePlanner};

use anyhow::Result;

/// Journeys that are shown with `--examples`.
const EXAMPLE_JOURNEYS: [(&str, &str); 4] = [
    ("Bank", "Aldgate East"),
    ("Paddington", "Oxford Circus"),
    ("Elephant and Castle", "Bank"),
    ("Baker Street", "Warren Street"),
];

#[derive(Helper, Hinter, Highlighter, Validator)]
struct ConsoleHelper {
    stations: Vec<String>,
}

impl ConsoleHelper {
    pub fn new(stations: Vec<String>) -> ConsoleHelper {
        ConsoleHelper { stations }
    }
}

impl Completer for ConsoleHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context,
    ) -> std::result::Result<(usize, Vec<rustyline::completion::Pair>), ReadlineError> {
        // the whole line is the (partial) station name
        let prefix = &line[..pos];
        let candidates = self
            .stations
            .iter()
            .filter(|s| s.starts_with(prefix))
            .map(|s| rustyline::completion::Pair {
                display: s.clone(),
                replacement: s.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

enum Prompt {
    Station(String),
    Quit,
}

struct RouteRunner {
    planner: RoutePlanner<u32>,
}

impl RouteRunner {
    pub fn new(graph_file: Option<&Path>) -> Result<RouteRunner> {
        let graph = if let Some(graph_file) = graph_file {
            Graph::load_from(graph_file)?
        } else {
            info!("Using the built-in London underground network");
            london_underground()
        };
        Ok(RouteRunner {
            planner: RoutePlanner::new(graph)?,
        })
    }

    fn print_journey(journey: &Journey<u32>) {
        println!("Start station: {}", journey.start);
        println!("Destination station: {}", journey.end);
        println!("Time: {}", journey.distance);
        println!("Route:");
        println!("{}", journey);
    }

    pub fn route(&self, start: &str, end: &str) -> Result<()> {
        let journey = self.planner.route(start, end)?;
        RouteRunner::print_journey(&journey);
        Ok(())
    }

    pub fn examples(&self) -> Result<()> {
        for (i, (start, end)) in EXAMPLE_JOURNEYS.iter().enumerate() {
            println!("Example {}:", i + 1);
            self.route(start, end)?;
            println!();
        }
        Ok(())
    }

    pub fn all_routes(&self, start: &str) -> Result<()> {
        let paths = self.planner.routes_from(start)?;

        let mut out = Table::new();
        let mut header_row = Row::empty();
        header_row.add_cell(Cell::from(&"station"));
        header_row.add_cell(Cell::from(&"time"));
        header_row.add_cell(Cell::from(&"route"));
        out.add_row(header_row);

        for (station, route) in paths.iter() {
            let mut out_row = Row::empty();
            out_row.add_cell(Cell::from(&station.as_str()));
            if let Some(distance) = route.distance {
                out_row.add_cell(Cell::from(&distance));
                out_row.add_cell(Cell::from(&route.stops(station).join("->")));
            } else {
                out_row.add_cell(Cell::from(&"-"));
                out_row.add_cell(Cell::from(&"not reachable"));
            }
            out.add_row(out_row);
        }
        out.printstd();
        Ok(())
    }

    /// Ask for a station name until a known station is entered.
    fn ask_station(&self, rl: &mut Editor<ConsoleHelper>, prompt: &str) -> Result<Prompt> {
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line == "quit" || line == "exit" {
                        return Ok(Prompt::Quit);
                    }
                    rl.add_history_entry(line);
                    if self.planner.contains(line) {
                        return Ok(Prompt::Station(line.to_string()));
                    }
                    println!("Station does not exist.");
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    return Ok(Prompt::Quit);
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    return Ok(Prompt::Quit);
                }
                Err(err) => bail!("can't read input: {}", err),
            }
        }
    }

    pub fn start_loop(&self) -> Result<()> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl = Editor::with_config(config);
        let stations = self
            .planner
            .stations()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        rl.set_helper(Some(ConsoleHelper::new(stations)));

        loop {
            let start = match self.ask_station(&mut rl, "Input the Start Point: ")? {
                Prompt::Station(s) => s,
                Prompt::Quit => break,
            };
            let end = match self.ask_station(&mut rl, "Input the End Point: ")? {
                Prompt::Station(s) => s,
                Prompt::Quit => break,
            };
            if let Err(err) = self.route(&start, &end) {
                println!("Error: {}", err);
            }
            println!();
        }
        Ok(())
    }
}

fn main() {
    let matches = App::new("transitroute")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Finds the fastest route between two stations of a transit network.")
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("from")
                .short("f")
                .long("from")
                .help("Start station")
                .takes_value(true)
                .requires("to"),
        )
        .arg(
            Arg::with_name("to")
                .short("t")
                .long("to")
                .help("Destination station")
                .takes_value(true)
                .requires("from"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("Prints the routes from the given station to all other stations")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("examples")
                .short("e")
                .long("examples")
                .help("Prints some example journeys")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("GRAPH_FILE")
                .help("TOML file with the network (uses the London underground if not given)")
                .required(false)
                .index(1),
        )
        .get_matches();

    let log_filter = if matches.is_present("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_config = simplelog::ConfigBuilder::new()
        .add_filter_ignore_str("rustyline")
        .build();

    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        println!("Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger", e);
        if let Err(e_simple) = SimpleLogger::init(log_filter, log_config) {
            println!("Simple logging failed too: {}", e_simple);
        }
    }

    let graph_file = matches.value_of("GRAPH_FILE").map(Path::new);

    let runner = match RouteRunner::new(graph_file) {
        Ok(runner) => runner,
        Err(e) => {
            println!("Can't load the transit network: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = if let (Some(start), Some(end)) = (matches.value_of("from"), matches.value_of("to"))
    {
        runner.route(start, end)
    } else if let Some(start) = matches.value_of("all") {
        runner.all_routes(start)
    } else if matches.is_present("examples") {
        runner.examples()
    } else {
        runner.start_loop()
    };

    if let Err(e) = result {
        println!("Error: {:#}", e);
        std::process::exit(2);
    }
}
