//! Address allocation and listing commands.

use clap::Args;
use colored::Colorize;
use solarium_wallet::WalletService;

/// Derive the next address and register it.
#[derive(Args)]
pub struct NewCommand {
    /// Label for the new account; auto-labeled `account-{index}` if omitted.
    #[arg(short, long)]
    label: Option<String>,
}

impl NewCommand {
    /// Execute the command.
    pub fn execute(self, service: &WalletService) -> Result<(), Box<dyn std::error::Error>> {
        let (label, address) = match self.label {
            Some(label) => {
                let address = service.new_address(&label)?;
                (label, address)
            }
            None => service.new_address_auto()?,
        };

        let entry = service
            .list_accounts()
            .into_iter()
            .find(|a| a.label == label)
            .expect("freshly registered account is listed");

        println!();
        println!("      {}    {}", "Label".cyan().bold(), label);
        println!("      {}  {}", "Address".cyan().bold(), address.green());
        println!(
            "      {}     {}",
            "Path".cyan().bold(),
            format!("m/44'/501'/{}'/{}'/{}'", entry.account, entry.change, entry.index).dimmed()
        );
        println!();

        Ok(())
    }
}

/// List all registered accounts.
#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    /// Execute the command.
    pub fn execute(self, service: &WalletService) {
        let mut accounts = service.list_accounts();
        accounts.sort_by_key(|a| (a.account, a.change, a.index));

        if accounts.is_empty() {
            println!("No derived accounts held in memory.");
            return;
        }

        for account in accounts {
            println!(
                " - {} => {} (account {}, change {}, index {})",
                account.label.cyan().bold(),
                account.public_key.green(),
                account.account,
                account.change,
                account.index
            );
        }
    }
}
