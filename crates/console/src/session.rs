//! Main menu loop: buy, return, exit.

use std::io::{self, BufRead, Write};

use tracing::debug;

use dealership_core::DomainError;
use dealership_inventory::{CarModel, Catalog, InventoryPool};
use dealership_sales::{ConfirmationService, DealershipState, PurchaseOperation, ReturnOperation};

use crate::prompt::Prompter;

const MENU: &str = "\n1. Buy Car\n2. Return Car\n3. Exit\nEnter your choice: ";

/// Whether the session should keep going after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// One interactive session against a dealership state.
pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    catalog: &'a Catalog,
    confirmation: &'a dyn ConfirmationService,
    state: DealershipState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        prompter: Prompter<R, W>,
        catalog: &'a Catalog,
        confirmation: &'a dyn ConfirmationService,
        state: DealershipState,
    ) -> Self {
        Self {
            prompter,
            catalog,
            confirmation,
            state,
        }
    }

    pub fn into_parts(self) -> (DealershipState, Prompter<R, W>) {
        (self.state, self.prompter)
    }

    /// Show the menu until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(choice) = self.prompter.ask(MENU)? else {
                debug!("input closed; leaving menu");
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.buy()?,
                "2" => self.give_back()?,
                "3" => Flow::Stop,
                _ => {
                    self.prompter.say("\nPlease enter correct choice\n")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn select_model(&mut self) -> io::Result<Option<CarModel>> {
        self.prompter.say("\nSelect a car model:")?;
        for model in self.catalog.list_models() {
            self.prompter.say(format!("\t{}. {}", model.id, model.name))?;
        }
        let catalog = self.catalog;
        let Some(id) = self.prompter.ask_int(
            "\nEnter car model ID: ",
            "Invalid selection. Please enter a valid car model ID: ",
            |id| catalog.find_model(id).is_some(),
        )?
        else {
            return Ok(None);
        };
        Ok(catalog.find_model(id).cloned())
    }

    fn buy(&mut self) -> io::Result<Flow> {
        let Some(model) = self.select_model()? else {
            return Ok(Flow::Stop);
        };
        self.prompter.say(format!("You have selected: {}", model.name))?;

        if self.state.pool().is_empty() {
            self.prompter.say("No cars are available right now.")?;
            return Ok(Flow::Continue);
        }

        let mut prompt = "Enter the number of cars to buy: ";
        let count = loop {
            let Some(count) = self.prompter.ask_int(
                prompt,
                "Invalid input. Please enter a positive integer for the number of cars to buy: ",
                |_| true,
            )?
            else {
                return Ok(Flow::Stop);
            };
            match PurchaseOperation::batch_size(&self.state, count) {
                Ok(_) => break count,
                Err(err) => {
                    debug!(%err, "batch size rejected");
                    prompt = if count > 0 {
                        "Not enough cars available. Please enter a smaller number of cars to buy: "
                    } else {
                        "Invalid input. Please enter a positive integer for the number of cars to buy: "
                    };
                }
            }
        };

        self.prompter
            .say(format!("Available car IDs: {}", describe_pool(self.state.pool())))?;

        let operation = PurchaseOperation::new(self.confirmation);
        let mut batch = match operation.begin(&mut self.state, &model, count) {
            Ok(batch) => batch,
            Err(err) => {
                self.prompter.say(err)?;
                return Ok(Flow::Continue);
            }
        };

        let mut flow = Flow::Continue;
        'slots: while !batch.is_complete() {
            let slot = batch.next_slot();
            let Some(name) = self.prompter.ask(&format!("Enter your name for car {slot}: "))? else {
                flow = Flow::Stop;
                break;
            };

            let first = format!("Enter car ID for car {slot}: ");
            let retry = format!(
                "Invalid input or car not available. Please enter a valid car ID for car {slot}: "
            );
            let mut prompt = first.as_str();
            loop {
                let Some(unit) = self.prompter.ask_int(prompt, &retry, |_| true)? else {
                    flow = Flow::Stop;
                    break 'slots;
                };
                match batch.sell(name.as_str(), unit) {
                    Ok(_) => break,
                    Err(DomainError::InvalidUnitSelection(_)) => prompt = retry.as_str(),
                    Err(err) => {
                        self.prompter.say(err)?;
                        break 'slots;
                    }
                }
            }
        }

        let receipt = batch.finish();
        if receipt.confirmed {
            self.prompter.say("Successfully Bought\n")?;
        } else {
            self.prompter.say("Error\n")?;
        }
        Ok(flow)
    }

    fn give_back(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask_int(
            "Enter the Transaction ID to return the car: ",
            "Invalid input. Please enter a positive integer for the Transaction ID: ",
            |id| id > 0,
        )?
        else {
            return Ok(Flow::Stop);
        };

        match ReturnOperation::new(self.confirmation).run(&mut self.state, id) {
            Ok(receipt) if receipt.confirmed => self.prompter.say("Successfully Returned\n")?,
            Ok(_) => self.prompter.say("Return not confirmed\n")?,
            Err(DomainError::TransactionNotFound(id)) => {
                self.prompter.say(format!("No transaction found for ID {id}."))?
            }
            Err(err) => self.prompter.say(err)?,
        }
        Ok(Flow::Continue)
    }
}

/// Render the pool as comma-separated runs, e.g. `1-2, 4, 6-50`.
pub fn describe_pool(pool: &InventoryPool) -> String {
    if pool.is_empty() {
        return "none".to_string();
    }
    pool.ranges()
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
