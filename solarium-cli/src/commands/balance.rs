//! Balance lookup command.

use clap::Args;
use colored::Colorize;
use solarium_wallet::WalletService;

/// Look up a balance by address or label.
#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["address", "label"]),
))]
pub struct BalanceCommand {
    /// Base58 address to query.
    #[arg(short, long)]
    address: Option<String>,

    /// Registered account label to query.
    #[arg(short, long)]
    label: Option<String>,
}

impl BalanceCommand {
    /// Execute the command.
    pub fn execute(self, service: &WalletService) -> Result<(), Box<dyn std::error::Error>> {
        let (target, balance) = match (self.address, self.label) {
            (Some(address), _) => {
                let balance = service.get_balance(&address)?;
                (address, balance)
            }
            (None, Some(label)) => {
                let balance = service.get_balance_by_label(&label)?;
                (label, balance)
            }
            // clap's arg group guarantees one of the two is present.
            (None, None) => unreachable!(),
        };

        println!();
        println!("      {}  {}", "Account".cyan().bold(), target);
        println!("      {}  {} SOL", "Balance".cyan().bold(), balance.to_string().green());
        println!();

        Ok(())
    }
}
