use clap::Parser;
use rocket_cart::config::{CartConfig, Command};
use rocket_cart::lifecycle::{setup_tracing, CartSystem};
use rocket_cart::model::ProductId;
use rocket_cart::notify::Notifier;
use rocket_cart::view::CartView;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::parse();
    setup_tracing(config.verbose);

    info!("Starting rocket-cart");
    if config.verbose {
        tracing::debug!(?config, "CLI config");
    }

    let system = match CartSystem::start(&config).await {
        Ok(system) => system,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let (notifier, mut notices) = Notifier::channel();
    let view = CartView::new(system.cart_client.clone(), notifier);

    let command = config.command();
    info!(?command, product_id = ?command.product_id(), "Running command");
    run(&view, &command).await;

    match view.render().await {
        Ok(summary) => print!("{}", summary.render_table()),
        Err(e) => eprintln!("❌ {}", e),
    }

    drop(view);
    while let Ok(notice) = notices.try_recv() {
        eprintln!("[{}] {}", notice.severity, notice.message);
    }

    system.shutdown().await?;
    Ok(())
}

async fn run(view: &CartView, command: &Command) {
    match *command {
        Command::Show => {}
        Command::Add { id } => {
            view.add(ProductId(id)).await;
        }
        Command::Remove { id } => {
            view.remove(ProductId(id)).await;
        }
        Command::Update { id, amount } => {
            view.update(ProductId(id), amount).await;
        }
        Command::Increment { id } | Command::Decrement { id } => {
            let Some(item) = current_item(view, ProductId(id)).await else {
                eprintln!("Product {} is not in the cart", id);
                return;
            };
            if matches!(command, Command::Increment { .. }) {
                view.increment(&item).await;
            } else {
                view.decrement(&item).await;
            }
        }
    }
}

async fn current_item(view: &CartView, id: ProductId) -> Option<rocket_cart::model::CartItem> {
    let items = view.client().cart().await.ok()?;
    items.into_iter().find(|item| item.id == id)
}
