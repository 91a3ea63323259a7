// Manual test helper: send one SRD-with-RevData gossip request to a
// locally running CT monitor and print the raw response text.

use anyhow::Result;

use ct_gossip::gossip::{GossipClient, GossipClientConfig, SrdGossipRequest};

fn main() -> Result<()> {
    let client = GossipClient::new(GossipClientConfig::default())?;

    let request = SrdGossipRequest::new("eMj/JnboS5r42I9T4Iq3uRIXRn15EQUbYtAcDMMYT84=", 10, 100);

    let text = client.send_srd_with_revdata(&request)?;
    println!("{}", text);

    Ok(())
}
