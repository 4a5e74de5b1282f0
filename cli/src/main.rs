//! pitchkit - a guided configurator for Learning & Development proposals.
//!
//! A line-oriented wizard: step through client profile, module and case-study
//! selection, and delivery preferences, then generate the narrative and
//! export a slide deck or PDF. The heavy lifting lives in the library
//! crates; this binary only renders steps and parses commands.

mod settings;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use pitchkit_catalog::Catalog;
use pitchkit_engine::{
    Committed, PricingDraft, Session, SessionError, StepAdvisory, Toggle, WizardStep,
};
use pitchkit_export::{export_file_name, DeckClient, DocumentFlavor};
use pitchkit_gateway::NarrativeClient;
use pitchkit_types::{
    AmbitionId, CaseStudyId, DeliveryPath, FacilitationModel, Modality, ModuleId, Pricing, StageId,
};

use settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("PITCHKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "starting");

    let mut app = App::new(settings)?;
    app.run().await
}

struct App {
    settings: Settings,
    catalog: Catalog,
    narrative_client: NarrativeClient,
    deck_client: DeckClient,
    session: Session,
    pricing_draft: PricingDraft,
}

impl App {
    fn new(settings: Settings) -> Result<Self> {
        let narrative_client = NarrativeClient::new(settings.service_url.clone())
            .context("building narrative client")?;
        let deck_client =
            DeckClient::new(settings.service_url.clone()).context("building deck client")?;
        Ok(Self {
            settings,
            catalog: Catalog::builtin(),
            narrative_client,
            deck_client,
            session: Session::new(),
            pricing_draft: PricingDraft::new(),
        })
    }

    async fn run(&mut self) -> Result<()> {
        println!("pitchkit - L&D proposal configurator");
        println!("Type `help` for commands, `quit` to exit.\n");

        let stdin = io::stdin();
        loop {
            self.render_step();
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                break;
            }
            self.dispatch(line).await;
            println!();
        }
        Ok(())
    }

    async fn dispatch(&mut self, line: &str) {
        let (command, rest) = split_command(line);
        let outcome = match command {
            "help" => {
                self.print_help();
                Ok(())
            }
            "next" => {
                if self.session.advance() {
                    Ok(())
                } else if self.session.step().is_terminal() {
                    Err("already on the last step".to_string())
                } else {
                    Err(gating_hint(self.session.step()))
                }
            }
            "back" => {
                if self.session.retreat() {
                    Ok(())
                } else {
                    Err("already on the first step".to_string())
                }
            }
            "reset" => {
                self.session.reset();
                self.pricing_draft = PricingDraft::new();
                Ok(())
            }
            "status" => {
                self.print_status();
                Ok(())
            }
            "name" => {
                self.session.store_mut().set_client_name(rest);
                Ok(())
            }
            "stage" => self
                .session
                .store_mut()
                .set_stage(&self.catalog, StageId::new(rest))
                .map_err(|err| err.to_string()),
            "ambition" => self
                .session
                .store_mut()
                .set_ambition(&self.catalog, AmbitionId::new(rest))
                .map_err(|err| err.to_string()),
            "toggle" => self.toggle(rest),
            "path" => self.set_path(rest),
            "facilitation" => self.set_facilitation(rest),
            "modality" => self.set_modality(rest),
            "notes" => {
                self.session.store_mut().set_notes(rest);
                Ok(())
            }
            "cta" => {
                self.session.store_mut().set_call_to_action(rest);
                Ok(())
            }
            "price" => self.set_price(rest),
            "generate" => self.generate().await,
            "export" => self.export(rest).await,
            "show" => {
                self.print_narrative();
                Ok(())
            }
            other => Err(format!("unknown command `{other}` (try `help`)")),
        };

        if let Err(message) = outcome {
            println!("! {message}");
        }
    }

    fn toggle(&mut self, id: &str) -> Result<(), String> {
        if id.is_empty() {
            return Err("usage: toggle <id>".to_string());
        }
        let result = match self.session.step() {
            WizardStep::CaseStudies => self
                .session
                .store_mut()
                .toggle_case_study(&self.catalog, CaseStudyId::new(id)),
            _ => self
                .session
                .store_mut()
                .toggle_module(&self.catalog, ModuleId::new(id)),
        };
        match result {
            Ok(Toggle::Added) => {
                println!("added `{id}`");
                Ok(())
            }
            Ok(Toggle::Removed) => {
                println!("removed `{id}`");
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    fn set_path(&mut self, rest: &str) -> Result<(), String> {
        let (kind, partners) = split_command(rest);
        let path = match kind {
            "certification" => Some(DeliveryPath::Certification),
            "tailored" => {
                let partners: Vec<String> = partners
                    .split(',')
                    .map(str::trim)
                    .filter(|partner| !partner.is_empty())
                    .map(ToString::to_string)
                    .collect();
                Some(DeliveryPath::Tailored { partners })
            }
            "none" => None,
            _ => return Err("usage: path certification | tailored [a, b] | none".to_string()),
        };
        self.session.store_mut().set_path(path);
        Ok(())
    }

    fn set_facilitation(&mut self, rest: &str) -> Result<(), String> {
        let model = match rest {
            "internal" => FacilitationModel::Internal,
            "external" => FacilitationModel::External,
            "mixed" => FacilitationModel::Mixed,
            _ => return Err("usage: facilitation internal | external | mixed".to_string()),
        };
        self.session.store_mut().set_facilitation(model);
        Ok(())
    }

    fn set_modality(&mut self, rest: &str) -> Result<(), String> {
        let modality = match rest {
            "digital" => Modality::Digital,
            "hybrid" => Modality::Hybrid,
            "in-person" => Modality::InPerson,
            _ => return Err("usage: modality digital | hybrid | in-person".to_string()),
        };
        self.session.store_mut().set_modality(modality);
        Ok(())
    }

    fn set_price(&mut self, rest: &str) -> Result<(), String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        match parts.as_slice() {
            ["none"] => {
                self.pricing_draft
                    .clear(self.session.store_mut());
                Ok(())
            }
            ["fixed", amount] => {
                let amount = parse_amount(amount)?;
                let pricing = Pricing::fixed(amount).map_err(|err| err.to_string())?;
                self.session
                    .store_mut()
                    .set_pricing(pricing)
                    .map_err(|err| err.to_string())
            }
            ["rate", amount] => {
                let amount = parse_amount(amount)?;
                let committed = self
                    .pricing_draft
                    .set_price_per_head(self.session.store_mut(), amount)
                    .map_err(|err| err.to_string())?;
                if committed == Committed::Pending {
                    println!("rate recorded; set `price min <n>` to commit");
                }
                Ok(())
            }
            ["min", minimum] => {
                let minimum: u32 = minimum
                    .parse()
                    .map_err(|_| format!("not a headcount: `{minimum}`"))?;
                let committed = self
                    .pricing_draft
                    .set_minimum_employees(self.session.store_mut(), minimum)
                    .map_err(|err| err.to_string())?;
                if committed == Committed::Pending {
                    println!("minimum recorded; set `price rate <amount>` to commit");
                }
                Ok(())
            }
            ["perhead", amount, minimum] => {
                let amount = parse_amount(amount)?;
                let minimum: u32 = minimum
                    .parse()
                    .map_err(|_| format!("not a headcount: `{minimum}`"))?;
                self.pricing_draft
                    .set_price_per_head(self.session.store_mut(), amount)
                    .map_err(|err| err.to_string())?;
                self.pricing_draft
                    .set_minimum_employees(self.session.store_mut(), minimum)
                    .map_err(|err| err.to_string())?;
                Ok(())
            }
            _ => Err(
                "usage: price none | fixed <amount> | perhead <amount> <min> | rate <amount> | min <n>"
                    .to_string(),
            ),
        }
    }

    async fn generate(&mut self) -> Result<(), String> {
        println!("generating narrative...");
        let result = self
            .session
            .generate_narrative(&self.narrative_client, &self.catalog)
            .await;
        match result {
            Ok(narrative) => {
                println!("--- narrative ---\n{narrative}\n-----------------");
                Ok(())
            }
            Err(err) => Err(retryable(&err)),
        }
    }

    async fn export(&mut self, rest: &str) -> Result<(), String> {
        let flavor = match rest {
            "pdf" => DocumentFlavor::Pdf,
            "deck" => DocumentFlavor::SlideDeck,
            _ => return Err("usage: export pdf | deck".to_string()),
        };

        let bytes = match flavor {
            DocumentFlavor::Pdf => self.session.export_pdf(&self.catalog),
            DocumentFlavor::SlideDeck => self.session.export_deck(&self.deck_client).await,
        }
        .map_err(|err| retryable(&err))?;

        let file_name = export_file_name(
            &self.session.store().get().client_name,
            Local::now().date_naive(),
            flavor,
        );
        let path = self.settings.artifact_path(&file_name);
        std::fs::write(&path, &bytes)
            .map_err(|err| format!("writing {}: {err}", path.display()))?;
        println!("wrote {} ({} bytes)", path.display(), bytes.len());

        let warnings = self.session.assemble(&self.catalog).warnings;
        for warning in warnings {
            println!("warning: {warning}");
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render_step(&self) {
        let step = self.session.step();
        let stepper: Vec<String> = WizardStep::ALL
            .iter()
            .map(|candidate| {
                if *candidate == step {
                    format!("[{}]", candidate.label())
                } else {
                    candidate.label().to_string()
                }
            })
            .collect();
        println!("{}", stepper.join(" > "));

        for advisory in self.session.advisories() {
            match advisory {
                StepAdvisory::NoModulesSelected => {
                    println!("(!) No recipes selected yet - case studies are most relevant once recipes are chosen.");
                }
            }
        }

        let config = self.session.store().get();
        match step {
            WizardStep::ClientProfile => {
                println!("Client: {}", display_or(config.client_name.as_str(), "(unset)"));
                println!("Stages:");
                for stage in self.catalog.stages() {
                    let marker = marker(config.stage.as_ref() == Some(&stage.id));
                    println!("  {marker} {:<14} {} - {}", stage.id, stage.name, stage.description);
                }
                println!("Ambitions:");
                for ambition in self.catalog.ambitions() {
                    let marker = marker(config.ambition.as_ref() == Some(&ambition.id));
                    println!("  {marker} {:<22} {}", ambition.id, ambition.name);
                }
            }
            WizardStep::Modules => {
                println!("Recipes ({} selected):", config.selected_modules.len());
                for stage in self.catalog.stages() {
                    println!("  [{}]", stage.name);
                    for module in self.catalog.modules_for_stage(&stage.id) {
                        let marker = marker(config.has_module(&module.id));
                        println!("    {marker} {:<34} {}", module.id, module.name);
                    }
                }
            }
            WizardStep::CaseStudies => {
                println!(
                    "Case studies ({} selected):",
                    config.selected_case_studies.len()
                );
                for tile in self.catalog.case_studies() {
                    let marker = marker(config.has_case_study(&tile.id));
                    println!("  {marker} {:<24} {} - {}", tile.id, tile.title, tile.metric);
                    if !tile.related_modules.is_empty() {
                        let related: Vec<&str> = tile
                            .related_modules
                            .iter()
                            .map(ModuleId::as_str)
                            .collect();
                        println!("      related recipes: {}", related.join(", "));
                    }
                }
            }
            WizardStep::Delivery => {
                let path = config
                    .path
                    .as_ref()
                    .map_or("(unset)".to_string(), |p| p.display_name().to_string());
                println!("Path: {path}");
                println!("Facilitation: {}", config.facilitation);
                println!("Modality: {}", config.modality);
                if !config.notes.is_empty() {
                    println!("Notes: {}", config.notes);
                }
            }
            WizardStep::Export => {
                self.print_status();
                println!(
                    "Narrative: {}",
                    if config.narrative_text().is_some() {
                        "generated"
                    } else {
                        "not generated (run `generate`; required for `export pdf`)"
                    }
                );
            }
        }
    }

    fn print_status(&self) {
        let config = self.session.store().get();
        println!("Client: {}", display_or(config.client_name.as_str(), "(unset)"));
        let stage = config
            .stage
            .as_ref()
            .and_then(|id| self.catalog.stage(id))
            .map_or("Not selected", |entry| entry.name.as_str());
        let ambition = config
            .ambition
            .as_ref()
            .and_then(|id| self.catalog.ambition(id))
            .map_or("Not selected", |entry| entry.name.as_str());
        println!("Stage: {stage} | Ambition: {ambition}");
        println!(
            "Recipes: {} | Case studies: {}",
            config.selected_modules.len(),
            config.selected_case_studies.len()
        );
        println!("Pricing: {}", config.pricing);
    }

    fn print_narrative(&self) {
        match self.session.store().get().narrative_text() {
            Some(narrative) => println!("{narrative}"),
            None => println!("(no narrative generated yet)"),
        }
    }

    fn print_help(&self) {
        println!("navigation: next | back | reset | status | quit");
        println!("profile:    name <client> | stage <id> | ambition <id>");
        println!("selection:  toggle <id>  (recipes on the Recipes step, case studies on the Case Studies step)");
        println!("delivery:   path certification|tailored [a, b]|none | facilitation <m> | modality <m> | notes <text> | cta <text>");
        println!("export:     price none|fixed <amt>|perhead <amt> <min>|rate <amt>|min <n>");
        println!("            generate | show | export pdf | export deck");
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    raw.trim_start_matches('$')
        .parse()
        .map_err(|_| format!("not an amount: `{raw}`"))
}

fn gating_hint(step: WizardStep) -> String {
    match step {
        WizardStep::ClientProfile => "select a stage and an ambition first".to_string(),
        WizardStep::Modules => "select at least one recipe first".to_string(),
        _ => "cannot advance".to_string(),
    }
}

fn retryable(err: &SessionError) -> String {
    format!("{err} (retry when ready)")
}
