//! Command handlers for the longplan CLI.
//!
//! Each handler performs at most one mutation, saves the whole plan right
//! after it, and renders the result.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use longplan_core::{
    classify,
    display::{ActionResult, CreateResult, Focus, OperationStatus},
    generate_plan,
    generator::{ScalePlan, Template},
    Duration, GeneratePlan, Plan, PlanAction, PlanStore,
};

use crate::{
    args::{CategorizeArgs, NewPlanArgs},
    renderer::TerminalRenderer,
};

/// Hint printed wherever a plan is needed but none is stored.
const NO_PLAN_HINT: &str = "No plan yet. Create one with `longplan new \"<goal>\"`.\n";

pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    fn load(&self) -> Result<Option<Plan>> {
        self.store
            .load()
            .with_context(|| format!("Failed to load plan from {}", self.store.path().display()))
    }

    fn save(&self, plan: &Plan) -> Result<()> {
        self.store
            .save(plan)
            .with_context(|| format!("Failed to save plan to {}", self.store.path().display()))
    }

    /// Generates and stores a new plan.
    pub fn new_plan(&self, args: &NewPlanArgs) -> Result<()> {
        if !args.force && self.load()?.is_some() {
            bail!("A plan already exists. Run `longplan reset` first or pass --force.");
        }

        let params = GeneratePlan::from(args);
        let plan = generate_plan(&params).context("Failed to generate plan")?;
        self.save(&plan)?;
        info!("Created plan {} with {} items", plan.id, plan.item_count());

        let category = classify(&plan.goal);
        self.renderer
            .render(&CreateResult::new(&plan, category).to_string());
        Ok(())
    }

    /// Shows the focus view.
    pub fn show(&self) -> Result<()> {
        match self.load()? {
            Some(plan) => self.renderer.render(&Focus(&plan).to_string()),
            None => self.renderer.render(NO_PLAN_HINT),
        }
        Ok(())
    }

    /// Shows the full plan.
    pub fn show_plan(&self) -> Result<()> {
        match self.load()? {
            Some(plan) => self.renderer.render(&plan.to_string()),
            None => self.renderer.render(NO_PLAN_HINT),
        }
        Ok(())
    }

    /// Completes or skips the current item and saves the plan.
    pub fn act(&self, action: PlanAction) -> Result<()> {
        let Some(mut plan) = self.load()? else {
            self.renderer.render(NO_PLAN_HINT);
            return Ok(());
        };

        let item_name = plan.current_item().map(|item| item.name.clone());
        if plan.apply(action) {
            self.save(&plan)?;
            debug!("{action:?} applied to {item_name:?}");
        }

        let result = ActionResult {
            action,
            item_name,
            plan: &plan,
        };
        self.renderer.render(&result.to_string());
        Ok(())
    }

    /// Prints completed and total counts.
    pub fn progress(&self) -> Result<()> {
        match self.load()? {
            Some(plan) => self.renderer.render(&format!("{}\n", plan.progress())),
            None => self.renderer.render(NO_PLAN_HINT),
        }
        Ok(())
    }

    /// Discards the stored plan.
    pub fn reset(&self) -> Result<()> {
        let status = if self.store.exists() {
            self.store
                .clear()
                .with_context(|| format!("Failed to clear {}", self.store.path().display()))?;
            info!("Cleared plan file {}", self.store.path().display());
            OperationStatus::changed("Plan discarded")
        } else {
            OperationStatus::unchanged("there is no plan to discard.")
        };
        self.renderer.render(&status.to_string());
        Ok(())
    }

    /// Prints the category and template outline for a goal.
    pub fn categorize(&self, args: &CategorizeArgs) -> Result<()> {
        let category = classify(args.goal.trim());
        let template = Template::for_category(category);

        let mut out = format!("# {}\n\nCategory: {category}\n\n", args.goal.trim());
        for (index, phase) in template.phases.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} ({} items)\n",
                index + 1,
                phase.name,
                phase.items.len()
            ));
        }
        out.push('\n');
        for duration in Duration::ALL {
            let scale = ScalePlan::compute(&template, duration, args.weekly_hours);
            out.push_str(&format!(
                "- {duration}, {}h/week: target {} items{}\n",
                args.weekly_hours,
                scale.target_items,
                if scale.expands() { ", deepened" } else { "" }
            ));
        }

        self.renderer.render(&out);
        Ok(())
    }
}
