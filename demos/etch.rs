mod utils;

use argh::FromArgs;
use log::info;
use ord_runes::{EncipherRequest, EtchingArgs, MintArgs, RuneService as _};
use utils::OrdClient;

#[derive(FromArgs, Debug)]
#[argh(description = "Encipher an etching runestone")]
struct Args {
    #[argh(option, short = 'u')]
    /// ord server url
    url: String,

    #[argh(option, short = 'N')]
    /// rune name
    rune_name: String,

    #[argh(option, short = 'd', default = "0")]
    /// divisibility
    divisibility: u8,

    #[argh(option, short = 's')]
    /// symbol
    symbol: Option<char>,

    #[argh(option, short = 'l', default = "0")]
    /// mint limit, 0 for none
    limit: u64,

    #[argh(option, short = 'H')]
    /// current bitcoin height, used for validation
    height: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let client = OrdClient::new(args.url);
    let request = EncipherRequest::etching(
        EtchingArgs {
            divisibility: args.divisibility,
            mint: MintArgs {
                limit: args.limit,
                ..Default::default()
            },
            rune: args.rune_name,
            symbol: args.symbol,
        },
        args.height,
    )?;
    info!("etching data: {}", request.to_json()?);

    let response = client.encipher(&request).await?;
    let script = response.script()?;
    info!("runestone script: {script}");

    println!("{}", response.script_hex);

    Ok(())
}
