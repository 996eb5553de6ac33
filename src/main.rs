use clap::Parser;
use small_storefront::core::snapshot::{load_snapshot, save_snapshot};
use small_storefront::domain::ports::Catalog;
use small_storefront::utils::error::ErrorSeverity;
use small_storefront::utils::{logger, validation::Validate};
use small_storefront::{
    BackendClient, CartStore, CheckoutSummary, CliConfig, LocalStorage, MemoryCatalog,
    RestCatalog, Storefront, StorefrontConfig, StorefrontError,
};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting small-storefront");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Storefront session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // exit code follows error severity
        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2, // retryable
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), StorefrontError> {
    cli.validate()?;

    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let config = StorefrontConfig::from_file(&cli.config)?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated for '{}'", config.store.name);

    if config.uses_remote_catalog() {
        let backend = config
            .backend
            .as_ref()
            .ok_or_else(|| StorefrontError::MissingConfigError {
                field: "backend".to_string(),
            })?;
        let catalog = RestCatalog::new(BackendClient::from_config(backend)?);
        run_session(cli, &config, Storefront::new(catalog)).await
    } else {
        let catalog = MemoryCatalog::new(config.products.clone(), config.orders.clone())
            .with_categories(config.categories.clone());
        run_session(cli, &config, Storefront::new(catalog)).await
    }
}

async fn run_session<C: Catalog>(
    cli: &CliConfig,
    config: &StorefrontConfig,
    storefront: Storefront<C>,
) -> Result<(), StorefrontError> {
    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the script will not be executed");
        let products = storefront.catalog().products().await?;
        println!("{} products in catalog:", products.len());
        for product in products {
            println!(
                "  [{}] {} ({}) Rs {:.2}, max {}",
                product.id, product.title, product.slug, product.price, product.max_quantity
            );
        }
        let categories = storefront.catalog().categories().await?;
        println!("{} categories in catalog:", categories.len());
        for category in categories {
            println!("  {} ({})", category.name, category.slug);
        }
        println!("{} scripted actions", config.script.len());
        return Ok(());
    }

    // snapshot paths are used as given, so the storage needs no base path
    let storage = LocalStorage::new("");
    let mut cart = match cli.snapshot.as_deref() {
        Some(path) if Path::new(path).exists() => {
            tracing::info!("📦 Restoring cart from: {}", path);
            load_snapshot(&storage, path).await?
        }
        _ => CartStore::new(),
    };

    let report = storefront.run(&mut cart, &config.script).await?;
    if report.limits_reached > 0 {
        tracing::warn!("⚠️ {} actions hit a product quantity limit", report.limits_reached);
    }
    if report.not_in_cart > 0 {
        tracing::warn!("⚠️ {} actions targeted products not in the cart", report.not_in_cart);
    }

    println!("🛒 Shopping Cart ({} items)", cart.len());
    for item in cart.items() {
        println!(
            "  {} x{} @ Rs {:.2} = Rs {:.2}",
            item.title,
            item.quantity,
            item.price,
            item.subtotal()
        );
    }
    println!("{}", CheckoutSummary::from_cart(&cart));

    if let Some(path) = cli.snapshot.as_deref() {
        save_snapshot(&storage, path, &cart).await?;
        println!("📁 Cart snapshot saved to: {}", path);
    }

    Ok(())
}
