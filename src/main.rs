use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_search::config;
use smart_search::console::{parse_command, render_view, Command};
use smart_search::{generate, SearchSession};

fn print_view(session: &SearchSession) {
    let state = session.state();
    let outcome = session.view();
    print!("{}", render_view(&outcome, &state.query, state.category));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config()?;

    let records = generate(app_config.dataset.count, app_config.dataset.seed)?;
    tracing::info!(
        "Generated {} records (seed: {:?}), debounce {}ms",
        records.len(),
        app_config.dataset.seed,
        app_config.search.debounce_ms
    );

    let session = Arc::new(SearchSession::from_config(records, &app_config));

    // Print every settled result set / 结果就绪时输出
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
    let printer = {
        let session = Arc::clone(&session);
        let mut rx = session.subscribe();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let loading = rx.borrow_and_update().loading;
                        if !loading {
                            print_view(&session);
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
            }
        })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Query(query)) => {
                session.set_query(query);
            }
            Ok(Command::Tab(category)) => {
                session.select_category(category);
                print_view(&session);
            }
            Ok(Command::Toggle(category)) => {
                let settings = session.toggle_setting(category);
                let state = if settings.is_enabled(category) { "enabled" } else { "disabled" };
                tracing::info!("{} tab {}", category, state);
                print_view(&session);
            }
            Ok(Command::Clear) => {
                session.clear();
            }
            Ok(Command::Quit) => break,
            Err(e) => tracing::warn!("{}", e),
        }
    }

    // Let the last query finish before exiting / 退出前等待最后一次搜索
    session.settled().await;
    let _ = shutdown_tx.send(());
    printer.await?;

    Ok(())
}
