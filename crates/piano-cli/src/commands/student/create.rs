use piano_core::entities::{Pricing, Student};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub name: String,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub rate: Option<f64>,
    pub lesson_duration: u32,
    pub payment_terms: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = build_student(params);
    let created = ctx.api.create_student(&student, &ctx.session).await?;
    output(&created, flags.format)
}

fn build_student(params: Params) -> Student {
    let pricing = params.rate.map(|hourly_rate| Pricing {
        id: None,
        hourly_rate,
        lesson_duration: params.lesson_duration,
        payment_terms: params.payment_terms,
    });
    Student {
        name: params.name,
        age: params.age,
        grade: params.grade,
        email: params.email,
        phone: params.phone,
        notes: params.notes,
        pricing,
        ..Student::default()
    }
}
