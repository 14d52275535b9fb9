use std::collections::BTreeMap;
use std::error::Error;

use sc_application::ApiClient;
use sc_application::ports::{HttpTransport, SessionStorage};
use sc_domain::account::LoginPayload;
use sc_domain::catalog::{count_districts_in_region, departments_of};
use sc_domain::pro::{OnlineStatus, PageQuery, ProSearchParams};
use serde_json::json;
use tracing::info;

use crate::cli::{Command, FavoritesCommand, ListingsArgs, LoginArgs, SearchArgs};
use crate::output::print_json;

type CommandResult = Result<(), Box<dyn Error>>;

/// Runs one command against an initialized client.
pub async fn execute<T, S>(client: &ApiClient<T, S>, command: Command) -> CommandResult
where
    T: HttpTransport,
    S: SessionStorage,
{
    match command {
        Command::Session => session(client).await,
        Command::Login(args) => login(client, args).await,
        Command::Logout => {
            client.logout().await;
            print_json(&json!({ "authenticated": false }))?;
            Ok(())
        }
        Command::Me => Ok(print_json(&client.me().await?)?),
        Command::Search(args) => search(client, args).await,
        Command::Favorites(command) => favorites(client, command).await,
        Command::Listings(args) => listings(client, args).await,
        Command::Subscription => Ok(print_json(&client.subscription().await?)?),
        Command::Ads => ads(client).await,
        Command::Regions => regions(client).await,
    }
}

async fn session<T: HttpTransport, S: SessionStorage>(client: &ApiClient<T, S>) -> CommandResult {
    let session = client.session().snapshot().await;
    print_json(&json!({
        "authenticated": session.is_authenticated(),
        "refreshable": session.refresh_token.is_some(),
        "baseUrl": client.config().base_url().as_str(),
    }))?;
    Ok(())
}

async fn login<T: HttpTransport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    args: LoginArgs,
) -> CommandResult {
    let session = client
        .login(&LoginPayload {
            phone: args.phone,
            password: args.password,
        })
        .await?;
    info!("session stored");
    print_json(&json!({
        "authenticated": session.is_authenticated(),
        "refreshable": session.refresh_token.is_some(),
    }))?;
    Ok(())
}

async fn search<T: HttpTransport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    args: SearchArgs,
) -> CommandResult {
    let params = ProSearchParams {
        metier: args.job,
        zone_geographique: args.zone,
        search: args.query,
        statut_en_ligne: args.online.then_some(OnlineStatus::Online),
        page: args.page,
        ..ProSearchParams::default()
    };

    let mut page = client.search_pros(&params).await?;
    for pro in &mut page.results {
        pro.photo_url = client.config().media_url(pro.photo_url.as_deref());
    }
    print_json(&page)?;
    Ok(())
}

async fn favorites<T: HttpTransport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    command: FavoritesCommand,
) -> CommandResult {
    match command {
        FavoritesCommand::List { page } => {
            let favorites = client
                .list_favorites(PageQuery {
                    page,
                    page_size: None,
                })
                .await?;
            print_json(&favorites)?;
        }
        FavoritesCommand::Add { pro_id } => print_json(&client.add_favorite(pro_id).await?)?,
        FavoritesCommand::Remove { pro_id } => {
            client.remove_favorite(pro_id).await?;
            print_json(&json!({ "removed": pro_id }))?;
        }
    }
    Ok(())
}

async fn listings<T: HttpTransport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    args: ListingsArgs,
) -> CommandResult {
    let listings = if args.mine {
        client.my_listings().await?
    } else {
        let mut filters = BTreeMap::new();
        if let Some(city) = args.city {
            filters.insert("ville".to_string(), city);
        }
        client.list_listings(&filters).await?
    };
    print_json(&listings)?;
    Ok(())
}

async fn ads<T: HttpTransport, S: SessionStorage>(client: &ApiClient<T, S>) -> CommandResult {
    let mut ads = client.ads().await?;
    for ad in &mut ads {
        ad.fichier_url = client.config().media_url(ad.fichier_url.as_deref());
    }
    print_json(&ads)?;
    Ok(())
}

async fn regions<T: HttpTransport, S: SessionStorage>(client: &ApiClient<T, S>) -> CommandResult {
    let regions = client.locations_tree().await?;
    let summary: Vec<_> = regions
        .iter()
        .map(|region| {
            json!({
                "id": region.id,
                "name": region.name,
                "departments": departments_of(region)
                    .iter()
                    .map(|department| department.name.as_str())
                    .collect::<Vec<_>>(),
                "districts": count_districts_in_region(region),
            })
        })
        .collect();
    print_json(&summary)?;
    Ok(())
}
