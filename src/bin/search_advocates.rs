//! Terminal client for the advocate directory.
//!
//! Commits the requested filters through the search controller, fetches the
//! matching page from a running server and prints it.

use std::process::ExitCode;

use clap::Parser;

use advocate_directory::domain::advocate::{Advocate, DEGREES, SPECIALTIES};
use advocate_directory::domain::filter::PageSize;
use advocate_directory::pagination::page_window;
use advocate_directory::search::http::HttpAdvocateSource;
use advocate_directory::search::{SearchController, SearchStatus};

#[derive(Debug, Parser)]
#[command(about = "Search the healthcare advocate directory")]
struct Args {
    /// Base URL of the directory server.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Raw query string to start from, e.g. `search=jane&page=2`.
    #[arg(long, default_value = "")]
    query: String,

    /// Substring of first name, last name or city.
    #[arg(long)]
    search: Option<String>,

    /// Specialty to match; repeat to match any of several.
    #[arg(long = "specialty")]
    specialties: Vec<String>,

    /// Adds the specialty to those from `--query`, or removes it when present.
    #[arg(long = "toggle-specialty")]
    toggled_specialties: Vec<String>,

    #[arg(long)]
    degree: Option<String>,

    /// Minimum years of experience.
    #[arg(long)]
    min_experience: Option<u32>,

    #[arg(long)]
    page: Option<usize>,

    /// Results per page: 10, 25 or 100.
    #[arg(long)]
    limit: Option<i64>,

    /// Print the known specialties and degrees and exit.
    #[arg(long)]
    list_filters: bool,
}

fn print_advocate(advocate: &Advocate) {
    println!(
        "#{:<5} {}, {} | {} | {} yrs | {} | {}",
        advocate.id,
        advocate.full_name(),
        advocate.degree,
        advocate.city,
        advocate.years_of_experience,
        advocate.phone_number,
        advocate.specialties.join(", ")
    );
}

fn print_page_window(total_pages: usize, current: usize) {
    let links = page_window(total_pages, current)
        .into_iter()
        .map(|page| match page {
            Some(page) if page == current => format!("[{page}]"),
            Some(page) => page.to_string(),
            None => "...".to_string(),
        })
        .collect::<Vec<_>>();
    println!("Pages: {}", links.join(" "));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args = Args::parse();

    if args.list_filters {
        println!("Degrees: {}", DEGREES.join(", "));
        println!("Specialties:");
        for specialty in SPECIALTIES {
            println!("  {specialty}");
        }
        return ExitCode::SUCCESS;
    }

    let mut controller = SearchController::new(HttpAdvocateSource::new(&args.base_url), "");
    controller.navigate(&args.query);

    let filters_given = args.search.is_some()
        || !args.specialties.is_empty()
        || !args.toggled_specialties.is_empty()
        || args.degree.is_some()
        || args.min_experience.is_some();

    if filters_given {
        let staged = controller.staged_mut();
        if let Some(search) = args.search {
            staged.search = search;
        }
        if !args.specialties.is_empty() {
            staged.specialties = args.specialties;
        }
        for specialty in &args.toggled_specialties {
            staged.toggle_specialty(specialty);
        }
        if let Some(degree) = args.degree {
            staged.degree = degree;
        }
        if let Some(min_experience) = args.min_experience {
            staged.min_experience = min_experience;
        }
        controller.submit();
    }

    if let Some(limit) = args.limit {
        controller.set_limit(PageSize::from_requested(Some(limit)));
    }
    if let Some(page) = args.page {
        controller.set_page(page);
    }

    log::info!("Fetching {}", controller.ticket().path());
    controller.refresh().await;

    if let SearchStatus::Error(message) = controller.status() {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    let pagination = *controller.pagination();
    if controller.advocates().is_empty() {
        if controller.state().has_no_filters() && pagination.total == 0 {
            println!("The directory is empty. Seed it with POST /api/seed.");
        } else {
            println!("No advocates match the current filters.");
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "Showing {}-{} of {} advocates (page {} of {})",
        pagination.first_item(),
        pagination.last_item(),
        pagination.total,
        pagination.page,
        pagination.total_pages
    );
    for advocate in controller.advocates() {
        print_advocate(advocate);
    }
    print_page_window(pagination.total_pages, pagination.page);
    println!("Query: ?{}", controller.query_string());

    ExitCode::SUCCESS
}
