use crate::infra::{
    parse_days, sample_postings, sample_trainees, InMemoryJobRepository,
    InMemoryTraineeDirectory,
};
use clap::Args;
use job_board::config::AppConfig;
use job_board::error::AppError;
use job_board::jobs::{
    filter_jobs, Availability, JobBoardError, JobBoardService, JobCard, JobRepository,
    JobsScreen, UserId, WorkDay,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct FilterArgs {
    /// Days the trainee is free, e.g. `monday,wednesday`. Defaults to JOBS_DEFAULT_DAYS.
    #[arg(long, value_parser = parse_days)]
    pub(crate) days: Option<Availability>,
    /// CSV export of postings. Defaults to JOBS_FEED_CSV, then the built-in sample set.
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Trainee to run the walkthrough as.
    #[arg(long, default_value = "usr-avery")]
    pub(crate) user: String,
    /// Days to toggle before the second filter pass.
    #[arg(long, value_delimiter = ',', default_value = "monday,friday")]
    pub(crate) toggle: Vec<WorkDay>,
}

pub(crate) fn run_filter(args: FilterArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let availability = args.days.unwrap_or(config.jobs.default_availability);
    let feed = args.csv.or(config.jobs.feed_csv);
    let repository = InMemoryJobRepository::load(feed.as_deref())?;
    let postings = repository.fetch_all().map_err(JobBoardError::from)?;
    let matched = filter_jobs(&postings, &availability).map_err(JobBoardError::from)?;

    println!("Free on: {}", describe_days(&availability));
    println!(
        "{} of {} postings fit this schedule",
        matched.len(),
        postings.len()
    );
    for posting in &matched {
        println!(
            "- {} at {} [{}]",
            posting.name,
            posting.company,
            describe_schedule(&posting.schedule)
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { user, toggle } = args;

    let repository = Arc::new(InMemoryJobRepository::with_postings(sample_postings()));
    let trainees = Arc::new(InMemoryTraineeDirectory::with_trainees(sample_trainees()));
    let service = JobBoardService::new(repository, trainees);
    let trainee = service.trainee(&UserId(user))?;

    println!("Jobs screen walkthrough for {}", trainee.name);
    let mut screen = JobsScreen::default();
    screen.refresh(&service, &trainee)?;
    println!(
        "- Loaded {} postings (status {})",
        screen.jobs().len(),
        screen.status().label()
    );

    screen.apply_filter(&service)?;
    println!(
        "- Filtered for {}: {} postings",
        describe_days(&screen.availability()),
        screen.jobs().len()
    );
    render_cards(&screen.cards(&trainee));

    screen.open_overlay();
    for day in toggle {
        screen.toggle(day);
    }
    screen.apply_filter(&service)?;
    println!(
        "- Filtered for {}: {} postings",
        describe_days(&screen.availability()),
        screen.jobs().len()
    );

    let Some(first) = screen.jobs().first().map(|posting| posting.id.clone()) else {
        println!("  No postings to apply for");
        return Ok(());
    };
    match service.register_interest(&first, &trainee.id) {
        Ok(()) => println!("- Registered interest in {}", first),
        Err(err) => println!("  Interest not recorded: {}", err),
    }

    let listing = service.listing(&trainee.id, Some(&screen.availability()))?;
    match serde_json::to_string_pretty(&listing) {
        Ok(json) => println!("  Listing payload:\n{}", json),
        Err(err) => println!("  Listing payload unavailable: {}", err),
    }

    Ok(())
}

fn render_cards(cards: &[JobCard]) {
    for card in cards {
        let marker = if card.submitted { " (applied)" } else { "" };
        println!(
            "  - {} at {} [{}]{}",
            card.name,
            card.company,
            describe_schedule(&card.schedule),
            marker
        );
    }
}

fn describe_days(availability: &Availability) -> String {
    let days: Vec<_> = availability.days().map(WorkDay::label).collect();
    if days.is_empty() {
        "no days".to_string()
    } else {
        days.join(", ")
    }
}

fn describe_schedule(schedule: &[String]) -> String {
    if schedule.is_empty() {
        "flexible".to_string()
    } else {
        schedule.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_days_lists_labels_in_week_order() {
        let availability = Availability::from_days([WorkDay::Friday, WorkDay::Monday]);
        assert_eq!(describe_days(&availability), "Monday, Friday");
        assert_eq!(describe_days(&Availability::none()), "no days");
    }

    #[test]
    fn demo_runs_for_sample_graduate() {
        let args = DemoArgs {
            user: "usr-avery".to_string(),
            toggle: vec![WorkDay::Monday],
        };
        run_demo(args).expect("demo completes");
    }

    #[test]
    fn demo_rejects_unknown_trainee() {
        let args = DemoArgs {
            user: "usr-missing".to_string(),
            toggle: Vec::new(),
        };
        assert!(matches!(run_demo(args), Err(AppError::Board(_))));
    }
}
