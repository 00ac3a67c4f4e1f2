use serde::Serialize;

use crate::cli::commands::PageParams;
use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, detail_table, format_list, format_records, records_table};
use crate::db::{
    Booking, BookingRepository, BookingService, BookingServiceRepository, Completion, Database,
    Id, PaymentProgress, PaymentRepository, Person, PersonRepository, Property,
    PropertyRepository,
};

/// Everything known about one booking.
#[derive(Debug, Serialize)]
pub struct BookingSummary {
    pub booking: Booking,
    pub customer: Person,
    pub property: Property,
    pub services: Vec<BookingService>,
    pub progress: PaymentProgress,
    pub completion: Completion,
}

pub async fn list_bookings<D: Database>(
    db: &D,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let result = db.bookings().list_page(page.into()).await?;
    format_list(&result, format, "bookings")
}

pub async fn search_bookings<D: Database>(
    db: &D,
    query: &str,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let items = db.bookings().search(query, page.into()).await?;
    format_records(&items, format, "bookings")
}

pub async fn booking_summary<D: Database>(db: &D, id: Id) -> CliResult<BookingSummary> {
    let booking = db.bookings().get(id).await?;
    let customer = db.persons().get(booking.person_id).await?;
    let property = db.properties().get(booking.property_id).await?;
    let services = db.booking_services().list_by_booking(id).await?;
    let progress = db.payments().progress(id).await?;
    let completion = db.bookings().completion(id).await?;

    Ok(BookingSummary {
        booking,
        customer,
        property,
        services,
        progress,
        completion,
    })
}

/// Show a booking with its cost, payments and completion.
pub async fn show_booking<D: Database>(db: &D, id: Id, format: OutputFormat) -> CliResult<String> {
    let summary = booking_summary(db, id).await?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => {
            let progress = &summary.progress;
            let completion = &summary.completion;
            let details = detail_table([
                ("ID", summary.booking.id.to_string()),
                ("Date", summary.booking.booking_date.to_string()),
                ("Customer", summary.customer.to_string()),
                ("Property", summary.property.to_string()),
                ("Cost", format!("{:.2}", progress.cost)),
                (
                    "Paid",
                    format!("{:.2} ({} payments)", progress.paid, progress.payments),
                ),
                ("Outstanding", format!("{:.2}", progress.outstanding())),
                ("Pending", yes_no(progress.is_pending()).to_string()),
                (
                    "Completed",
                    format!(
                        "{} ({}/{} services)",
                        yes_no(completion.is_completed()),
                        completion.completed,
                        completion.total
                    ),
                ),
            ]);

            if summary.services.is_empty() {
                Ok(format!("{}\nNo services booked.", details))
            } else {
                Ok(format!("{}\n{}", details, records_table(&summary.services)))
            }
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
