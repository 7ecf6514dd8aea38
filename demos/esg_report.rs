//! End-to-end demo: login, fetch ESG scores for one RIC, print a table plus
//! entity metadata from search/explore.
//!
//! Endpoint and credential sourcing lives here, not in the library: set
//! `RDP_USERNAME`, `RDP_PASSWORD`, `RDP_CLIENTID`, and optionally
//! `RDP_BASE_URL` + `RDP_AUTH_URL`/`RDP_ESG_URL`/`RDP_SEARCH_EXPLORE_URL`
//! path suffixes to point at a non-production deployment.

use std::{env, process};

use rdplatform_rs::{AuthBuilder, Credentials, EsgBuilder, RdpClient, SearchBuilder, Table};
use url::Url;

fn env_url(base: &str, var: &str) -> Option<Url> {
    let path = env::var(var).ok()?;
    Url::parse(&format!("{base}{path}")).ok()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = env::var("RDP_USERNAME").unwrap_or_default();
    let password = env::var("RDP_PASSWORD").unwrap_or_default();
    let client_id = env::var("RDP_CLIENTID").unwrap_or_default();
    let universe = env::var("RDP_UNIVERSE").unwrap_or_else(|_| "LSEG.L".to_string());

    let mut builder = RdpClient::builder();
    if let Ok(base) = env::var("RDP_BASE_URL") {
        if let Some(u) = env_url(&base, "RDP_AUTH_URL") {
            builder = builder.auth_url(u);
        }
        if let Some(u) = env_url(&base, "RDP_ESG_URL") {
            builder = builder.esg_url(u);
        }
        if let Some(u) = env_url(&base, "RDP_SEARCH_EXPLORE_URL") {
            builder = builder.search_url(u);
        }
    }
    let client = builder.build()?;

    let credentials = Credentials::new(username, password, client_id);
    let token = match AuthBuilder::new(&client, &credentials).fetch().await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("cannot login to RDP: {e}");
            process::exit(1);
        }
    };
    println!("authenticated; access token valid for {}s", token.expires_in);

    let esg = EsgBuilder::new(&client, &token.access_token, &universe)
        .fetch()
        .await?;
    let table = Table::from_esg(&esg)?;
    let summary = table.select(&[
        "Instrument",
        "Period End Date",
        "ESG Score",
        "ESG Combined Score",
        "ESG Controversies Score",
    ])?;
    println!("{}", summary.head(5));

    let company = SearchBuilder::new(&client, &token.access_token)
        .view("Entities")
        .filter(format!("RIC eq '{universe}'"))
        .select("IssuerCommonName,DocumentTitle,RCSExchangeCountryLeaf,IssueISIN,ExchangeName,ExchangeCode,SearchAllCategoryv3,RCSTRBC2012Leaf")
        .fetch()
        .await?;

    println!("RIC: {universe} metadata ({} hits):", company.total);
    if let Some(hit) = company.hits.first() {
        for field in [
            "IssuerCommonName",
            "RCSExchangeCountryLeaf",
            "IssueISIN",
            "ExchangeName",
            "RCSTRBC2012Leaf",
        ] {
            if let Some(v) = hit.get(field).and_then(|v| v.as_str()) {
                println!("\t{field}: {v}");
            }
        }
    }

    Ok(())
}
