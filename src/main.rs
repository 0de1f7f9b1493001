use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use derive_more::Display;
use gtheorems::{
    front_end::{compile, edge_parse},
    graph::{random_graph, AdjacencyMatrix, RandomMode},
    query::{self, AdjacencyList, GraphProperties},
    theorem::{evaluate_with, Selection, TheoremId},
    types::VId,
};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "invalid vertex `{}`", _0)]
    InvalidVertex(String),
    #[display(fmt = "invalid number `{}`", _0)]
    InvalidNumber(String),
    #[display(fmt = "{}", _0)]
    InvalidEdge(String),
}

impl std::error::Error for Err {}

fn handle_theorems() {
    for &theorem in TheoremId::ALL.iter() {
        println!("{:<20} {}", theorem.to_string(), theorem.title());
    }
}

fn handle_describe(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = compile(matches.value_of("GRAPH").unwrap())?;
    let properties = GraphProperties::of(&graph);
    let adj = AdjacencyList::of(&graph);
    print!("{}", AdjacencyMatrix(&graph));
    println!("p = {}, q = {}", properties.num_vertices(), properties.num_edges());
    println!(
        "degrees: {}",
        query::degrees(&graph)
            .iter()
            .map(|(v, d)| format!("{}:{}", v, d))
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("components: {}", properties.components().len());
    println!("connected: {}", properties.is_connected());
    println!("tree: {}", properties.is_tree());
    println!("bipartite: {}", query::bipartition(&adj).is_bipartite());
    println!("diameter: {}", query::diameter(&adj));
    Ok(())
}

fn handle_eval(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let theorem: TheoremId = matches.value_of("THEOREM").unwrap().parse()?;
    let graph = compile(matches.value_of("GRAPH").unwrap())?;
    let mut selection = Selection::new();
    if let Some(mut values) = matches.values_of("path") {
        let u = parse_vid(values.next().unwrap())?;
        let v = parse_vid(values.next().unwrap())?;
        selection = selection.vertices(u, v);
    }
    if let Some(cut) = matches.value_of("cut") {
        selection = selection.edge(edge_parse(cut).map_err(|e| Err::InvalidEdge(e.to_string()))?);
    }
    print!("{}", evaluate_with(theorem, &graph, &selection));
    Ok(())
}

fn handle_random(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let num_vertices = parse_number(matches.value_of("N").unwrap())?;
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(parse_number(seed)? as u64),
        None => StdRng::from_os_rng(),
    };
    let mode = if matches.is_present("tree") {
        RandomMode::Tree
    } else {
        RandomMode::Unconstrained
    };
    println!("{}", random_graph(&mut rng, num_vertices, mode)?);
    Ok(())
}

fn parse_vid(vid: &str) -> Result<VId, Err> {
    vid.parse().map_err(|_| Err::InvalidVertex(String::from(vid)))
}

fn parse_number(number: &str) -> Result<usize, Err> {
    number
        .parse()
        .map_err(|_| Err::InvalidNumber(String::from(number)))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("theorems").about("Lists the supported theorems"))
        .subcommand(
            SubCommand::with_name("describe")
                .about("Displays the adjacency matrix and structural properties of a graph")
                .after_help(
                    r#"GRAPH is written as `<p>: <u>-<v> <u>-<v> ...`, e.g. "4: 1-2, 2-3, 3-4, 4-1"."#,
                )
                .arg(Arg::with_name("GRAPH").required(true)),
        )
        .subcommand(
            SubCommand::with_name("eval")
                .about("Evaluates a theorem against a graph")
                .arg(Arg::with_name("THEOREM").required(true))
                .arg(Arg::with_name("GRAPH").required(true))
                .arg(
                    Arg::with_name("path")
                        .help("Selects two vertices for unique_path")
                        .long("path")
                        .takes_value(true)
                        .number_of_values(2)
                        .value_names(&["U", "V"]),
                )
                .arg(
                    Arg::with_name("cut")
                        .help("Selects an edge to remove for tree_edges")
                        .long("cut")
                        .takes_value(true)
                        .value_name("U-V"),
                ),
        )
        .subcommand(
            SubCommand::with_name("random")
                .about("Generates a random graph")
                .arg(Arg::with_name("N").required(true))
                .arg(
                    Arg::with_name("tree")
                        .help("Generates a uniform random recursive tree")
                        .long("tree")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seeds the random number generator")
                        .long("seed")
                        .takes_value(true),
                ),
        )
        .get_matches();
    if matches.subcommand_matches("theorems").is_some() {
        handle_theorems();
    } else if let Some(matches) = matches.subcommand_matches("describe") {
        handle_describe(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("eval") {
        handle_eval(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("random") {
        handle_random(matches)?;
    }
    Ok(())
}
