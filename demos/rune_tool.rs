use argh::FromArgs;
use ord_runes::{
    pack_edict_id_with, EdictId, EncipherRequest, EtchingArgs, MintArgs, RuneId, SpacedRune,
};

#[derive(FromArgs, Debug)]
#[argh(description = "Encode rune names and ids")]
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Encode(Encode),
    Decode(Decode),
    EdictId(EdictIdCmd),
    RuneId(RuneIdCmd),
    Etching(Etching),
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "encode",
    description = "Split a spaced rune name into letters and spacers"
)]
struct Encode {
    #[argh(positional)]
    /// rune name, e.g. UNCOMMON.GOODS
    name: String,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "decode",
    description = "Render letters and spacers as a rune name"
)]
struct Decode {
    #[argh(positional)]
    /// rune letters
    rune: String,

    #[argh(positional)]
    /// spacers bitmask
    spacers: u32,

    #[argh(switch, short = 'd')]
    /// use `.` instead of `•`
    dot: bool,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "edict-id",
    description = "Pack a block:tx rune id into an edict id"
)]
struct EdictIdCmd {
    #[argh(positional)]
    /// rune id, e.g. 840000:1
    id: String,

    #[argh(switch)]
    /// do not set the claim bit
    no_claim: bool,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "rune-id",
    description = "Unpack an edict id into its block:tx rune id"
)]
struct RuneIdCmd {
    #[argh(positional)]
    /// edict id
    edict_id: u64,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "etching",
    description = "Print the encipher request of an etching"
)]
struct Etching {
    #[argh(option, short = 'N')]
    /// rune name
    rune_name: String,

    #[argh(option, short = 'd', default = "0")]
    /// divisibility
    divisibility: u8,

    #[argh(option, short = 's')]
    /// symbol
    symbol: Option<char>,

    #[argh(option, default = "0")]
    /// mint deadline, 0 for none
    deadline: u64,

    #[argh(option, default = "0")]
    /// mint limit, 0 for none
    limit: u64,

    #[argh(option, default = "0")]
    /// mint term, 0 for none
    term: u64,

    #[argh(option, short = 'H')]
    /// current bitcoin height
    height: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    match args.command {
        Command::Encode(Encode { name }) => {
            let spaced = name.parse::<SpacedRune>()?;
            println!("rune: {}", spaced.rune);
            println!("spacers: {} ({:#b})", spaced.spacers, spaced.spacers);
        }
        Command::Decode(Decode { rune, spacers, dot }) => {
            let spaced = SpacedRune::new(rune, spacers)?;
            if dot {
                println!("{}", spaced.to_string_with('.'));
            } else {
                println!("{spaced}");
            }
        }
        Command::EdictId(EdictIdCmd { id, no_claim }) => {
            println!("{}", pack_edict_id_with(&id, !no_claim)?);
        }
        Command::RuneId(RuneIdCmd { edict_id }) => {
            let edict_id = EdictId::from_value(edict_id);
            let rune_id: RuneId = edict_id.rune_id();
            println!("{rune_id} (claim: {})", edict_id.is_claim());
        }
        Command::Etching(etching) => {
            let request = EncipherRequest::etching(
                EtchingArgs {
                    divisibility: etching.divisibility,
                    mint: MintArgs {
                        deadline: etching.deadline,
                        limit: etching.limit,
                        term: etching.term,
                    },
                    rune: etching.rune_name,
                    symbol: etching.symbol,
                },
                etching.height,
            )?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}
