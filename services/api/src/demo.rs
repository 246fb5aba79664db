use crate::infra::{parse_keyword, read_answers, response_service};
use chrono::{Local, NaiveDate};
use clap::Args;
use spiritual_health::assessment::{
    AssessmentReport, AssessmentSession, QuestionSetKind, ScoringEngine,
};
use spiritual_health::error::AppError;
use spiritual_health::responses::{
    AgeBracket, ExportFormat, GenderFilter, ResponseFilter, ScoreRequest,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Show the question set for respondents with a religious faith
    #[arg(long)]
    pub(crate) religious: bool,
    /// Print the questions as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question ids to answers (1-6), e.g. {"q1": 4}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Score against the religious question set
    #[arg(long)]
    pub(crate) religious: bool,
    /// Print the full report payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Answer every question with this value in the sample session (1-6)
    #[arg(long, default_value_t = 4)]
    pub(crate) answer: i32,
    /// Use the religious question set for the sample session
    #[arg(long)]
    pub(crate) religious: bool,
    /// Skip the admin portion of the demo
    #[arg(long)]
    pub(crate) skip_admin: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Output format (csv or json)
    #[arg(long, default_value = "json", value_parser = parse_format)]
    pub(crate) format: ExportFormat,
    /// Case-insensitive search over respondent name and e-mail
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Gender filter (all, male, female, other)
    #[arg(long, default_value = "all", value_parser = parse_keyword::<GenderFilter>)]
    pub(crate) gender: GenderFilter,
    /// Age bracket (all, young, middle, senior)
    #[arg(long, default_value = "all", value_parser = parse_keyword::<AgeBracket>)]
    pub(crate) age: AgeBracket,
    /// Directory to write the export into; prints to stdout when omitted
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse()
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let kind = QuestionSetKind::from_flag(args.religious);
    let engine = ScoringEngine::standard();
    let questions = engine.catalog().question_set(kind);

    if args.json {
        let views: Vec<_> = questions.iter().map(|question| question.to_view()).collect();
        match serde_json::to_string_pretty(&views) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Question payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Question set: {}", kind.label());
    for question in questions {
        println!(
            "- [{}] {} / {}: {}",
            question.id,
            question.domain().label(),
            question.aspect.label(),
            question.text
        );
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let service = response_service(false)?;
    let report = service.score(&ScoreRequest {
        answers,
        is_religious: args.religious,
    })?;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answer,
        religious,
        skip_admin,
    } = args;

    println!("Spiritual health assessment demo");
    let engine = ScoringEngine::standard();
    let mut session = AssessmentSession::new(religious);
    while let Some(question) = session.next_question(&engine) {
        let id = question.id.clone();
        session.record_answer(&engine, &id, answer)?;
    }
    println!(
        "Answered {}/{} questions ({:.0}% complete)",
        session.answered(&engine),
        session.questions(&engine).len(),
        session.progress(&engine) * 100.0
    );

    let report = session.finish(&engine)?;
    render_report(&report);

    if skip_admin {
        return Ok(());
    }

    println!("\nAdmin view (sample responses)");
    let service = response_service(true)?;
    let statistics = service.statistics()?;
    println!(
        "- {} responses | average overall {:.1} | {} religious",
        statistics.total, statistics.average_overall_score, statistics.religious
    );
    println!(
        "- Gender: {} male / {} female / {} other",
        statistics.gender_distribution.male,
        statistics.gender_distribution.female,
        statistics.gender_distribution.other
    );

    for record in service.list(&ResponseFilter::default())? {
        let summary = record.report.summary();
        println!(
            "  #{} {} ({}, {}) submitted {} -> overall {:.1} [{}]",
            record.id,
            record.profile.name,
            record.profile.age,
            record.profile.biological_gender.label(),
            record.submitted_at.format("%Y-%m-%d %H:%M"),
            record.overall_average(),
            summary.overall.level_label
        );
    }

    let young = service.list(&ResponseFilter {
        age: AgeBracket::Young,
        ..ResponseFilter::default()
    })?;
    println!("- Respondents under 30: {}", young.len());

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs {
        format,
        search,
        gender,
        age,
        output_dir,
    } = args;

    let service = response_service(true)?;
    let filter = ResponseFilter {
        search,
        gender,
        age,
    };
    let today: NaiveDate = Local::now().date_naive();
    let payload = service.export(format, &filter, today)?;

    match output_dir {
        Some(dir) => {
            let path = dir.join(&payload.filename);
            std::fs::write(&path, &payload.body)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", String::from_utf8_lossy(&payload.body)),
    }
    Ok(())
}

pub(crate) fn render_report(report: &AssessmentReport) {
    let summary = report.summary();

    println!("\nQuestion set: {}", summary.question_set_label);
    println!(
        "Overall: {:.2} / 6 ({:.1}%, {})",
        summary.overall.score.average, summary.overall.score.percentage, summary.overall.level_label
    );

    println!("\nDomains");
    for domain in &summary.domains {
        println!(
            "- {}: {:.2} ({:.1}%, {})",
            domain.domain_label, domain.score.average, domain.score.percentage, domain.level_label
        );
        for aspect in &domain.aspects {
            println!(
                "    - {}: {:.2} ({:.1}%)",
                aspect.aspect_label, aspect.score.average, aspect.score.percentage
            );
        }
    }

    if let Some(strongest) = summary.strongest_domain {
        println!("\nStrongest domain: {strongest}");
    }
    if let Some(weakest) = summary.weakest_domain {
        println!("Weakest domain: {weakest}");
    }

    if summary.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &summary.recommendations {
            println!("- {}", recommendation.summary());
            for suggestion in &recommendation.suggestions {
                println!("    - {suggestion}");
            }
        }
    }
}
