use std::sync::Arc;

use clap::Args;
use workify::error::AppError;
use workify::listings::{
    JobListingDraft, JobListingService, JobListingView, JobSearchCriteria,
};

use crate::infra::{seed_listings, InMemoryJobListingRepository};

#[derive(Args, Debug, Default)]
pub(crate) struct JobsFilterArgs {
    /// Comma-delimited skills; a listing matches when it mentions any of them
    #[arg(long)]
    pub(crate) skills: Option<String>,
    /// Minimum salary; zero or omitted means no constraint
    #[arg(long)]
    pub(crate) min_salary: Option<f64>,
    /// Exact job type, e.g. "Remote" or "Hybrid"
    #[arg(long)]
    pub(crate) job_type: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the write portion of the demo (create, update, delete)
    #[arg(long)]
    pub(crate) read_only: bool,
}

impl JobsFilterArgs {
    fn criteria(self) -> JobSearchCriteria {
        JobSearchCriteria {
            skills: self.skills,
            min_salary: self.min_salary.unwrap_or(0.0),
            job_type: self.job_type,
            location: None,
        }
    }
}

async fn seeded_service() -> Result<Arc<JobListingService<InMemoryJobListingRepository>>, AppError>
{
    let repository = Arc::new(InMemoryJobListingRepository::default());
    seed_listings(&repository)
        .await
        .map_err(workify::listings::ListingServiceError::from)?;
    Ok(Arc::new(JobListingService::new(repository)))
}

pub(crate) async fn run_jobs_filter(args: JobsFilterArgs) -> Result<(), AppError> {
    let service = seeded_service().await?;
    let criteria = args.criteria();

    let drafts = service.filter(&criteria).await?;
    println!("Matching listings: {}", drafts.len());
    for draft in &drafts {
        render_draft(draft);
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = seeded_service().await?;

    println!("Workify job board demo");

    let all = service.list_all().await?;
    println!("\nSeeded listings ({})", all.len());
    for view in &all {
        render_view(view);
    }

    let criteria = JobSearchCriteria {
        skills: Some("Go, Rust".to_string()),
        min_salary: 60_000.0,
        job_type: None,
        location: None,
    };
    let matches = service.filter(&criteria).await?;
    println!("\nFilter: skills 'Go, Rust', salary >= 60000 ({} matches)", matches.len());
    for draft in &matches {
        render_draft(draft);
    }

    if args.read_only {
        return Ok(());
    }

    service
        .create(JobListingDraft {
            employer_id: 2,
            title: "Site Reliability Engineer".to_string(),
            description: "Keep the boards online.".to_string(),
            skills: "Rust, Kubernetes".to_string(),
            salary: 88_000.0,
            job_type: "Remote".to_string(),
            location: "Leipzig".to_string(),
        })
        .await?;

    let created = service
        .list_by_employer(2)
        .await?
        .into_iter()
        .max_by_key(|view| view.id)
        .expect("employer 2 has listings");
    println!("\nCreated listing {} ({})", created.id, created.title);

    let revised = JobListingDraft {
        employer_id: created.employer_id,
        title: created.title.clone(),
        description: created.description.clone(),
        skills: created.skills.clone(),
        salary: 92_000.0,
        job_type: created.job_type.clone(),
        location: created.location.clone(),
    };
    service.update(created.id, revised).await?;
    let updated = service
        .get(created.id)
        .await?
        .expect("updated listing present");
    println!("Updated listing {} salary to {}", updated.id, updated.salary);

    service.delete(created.id).await?;
    println!(
        "Deleted listing {} (lookup now yields {:?})",
        created.id,
        service.get(created.id).await?.map(|view| view.id)
    );

    Ok(())
}

fn render_view(view: &JobListingView) {
    println!(
        "- #{} {} | {} | {} | {} | {:.0}",
        view.id, view.title, view.job_type, view.location, view.skills, view.salary
    );
}

fn render_draft(draft: &JobListingDraft) {
    println!(
        "- {} | {} | {} | {} | {:.0}",
        draft.title, draft.job_type, draft.location, draft.skills, draft.salary
    );
}
