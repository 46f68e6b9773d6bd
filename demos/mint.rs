mod utils;

use argh::FromArgs;
use log::info;
use ord_runes::{EncipherRequest, RuneService as _, SpacedRune};
use utils::OrdClient;

#[derive(FromArgs, Debug)]
#[argh(description = "Look up a rune and encipher a mint runestone")]
struct Args {
    #[argh(option, short = 'u')]
    /// ord server url
    url: String,

    #[argh(option, short = 'N')]
    /// rune name, spacers are ignored
    rune_name: SpacedRune,

    #[argh(option, short = 'a')]
    /// amount to mint
    amount: u128,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let client = OrdClient::new(args.url);
    let detail = client.rune(&args.rune_name.rune).await?;
    info!(
        "rune {} id: {}, edict id: {}",
        detail.spaced_rune()?,
        detail.id,
        detail.edict_id(true)
    );

    let request = EncipherRequest::mint(detail.id, args.amount);
    info!("edict data: {}", request.to_json()?);

    let response = client.encipher(&request).await?;
    println!("{}", response.script_hex);

    Ok(())
}
