use chrono::{Local, NaiveTime};
use tracing::info;

use crate::domain::models::{
    appointment::NewAppointment,
    doctor::{NewDoctor, DEFAULT_RATING},
    invoice::{InvoiceStatus, NewInvoice},
    prescription::NewPrescription,
    record::NewMedicalRecord,
    service::NewService,
};
use crate::domain::services::validation::Registration;
use crate::error::AppError;
use crate::state::AppState;

pub const DEMO_EMAIL: &str = "demo@medicare.app";
pub const DEMO_PASSWORD: &str = "Demo@123";
pub const DEMO_NAME: &str = "Demo User";

// (name, specialization, hospital, contact, work_hours, bio, photo)
const DOCTORS: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    ("Dr. Sarah Johnson", "Cardiology", "Nova Heart Institute", "+1 555-210-7788", "Mon, Wed, Fri — 9:00–17:00",
     "15+ years treating coronary artery disease and heart failure; preventive cardiology advocate.",
     "https://randomuser.me/api/portraits/women/44.jpg"),
    ("Dr. Michael Chen", "Neurology", "Cerebra Neuro Center", "+1 555-889-2211", "Tue, Thu — 10:00–18:00",
     "Board-certified neurologist focused on migraines, epilepsy, and movement disorders.",
     "https://randomuser.me/api/portraits/men/32.jpg"),
    ("Dr. Emily Williams", "Pediatrics", "Sunrise Children’s Hospital", "+1 555-661-0099", "Mon–Fri — 08:00–16:00",
     "Primary care for kids, adolescent medicine, and vaccination counseling.",
     "https://randomuser.me/api/portraits/women/68.jpg"),
    ("Dr. Raj Patel", "Orthopedics", "Motion Ortho Clinic", "+1 555-774-9900", "Mon, Thu — 09:00–17:00",
     "Sports injuries, knee/hip replacements, and arthroscopy specialist.",
     "https://randomuser.me/api/portraits/men/56.jpg"),
    ("Dr. Aisha Khan", "Dermatology", "Glow Skin Center", "+1 555-120-3344", "Tue–Sat — 11:00–19:00",
     "Acne, psoriasis, cosmetic dermatology, and dermoscopy.",
     "https://randomuser.me/api/portraits/women/12.jpg"),
    ("Dr. Luis Garcia", "Gastroenterology", "Digestive Health Group", "+1 555-221-5566", "Mon–Fri — 09:30–17:30",
     "Endoscopy, IBS/IBD management, and hepatology.",
     "https://randomuser.me/api/portraits/men/71.jpg"),
    ("Dr. Hana Suzuki", "Endocrinology", "Metabolic Care Center", "+1 555-998-2233", "Mon, Wed, Fri — 10:00–16:00",
     "Diabetes, thyroid disorders, and osteoporosis.",
     "https://randomuser.me/api/portraits/women/28.jpg"),
    ("Dr. Omar Nasser", "Pulmonology", "Lung & Sleep Institute", "+1 555-552-7711", "Tue, Thu — 09:00–17:00",
     "Asthma, COPD, sleep apnea; certified in sleep medicine.",
     "https://randomuser.me/api/portraits/men/85.jpg"),
    ("Dr. Sofia Rossi", "Gynecology", "Women’s Wellness Center", "+1 555-330-8899", "Mon–Fri — 10:00–18:00",
     "Preventive care, fertility counseling, and minimally invasive surgery.",
     "https://randomuser.me/api/portraits/women/45.jpg"),
];

const SERVICES: &[(&str, &str, u32)] = &[
    ("General Consultation", "Primary care visits for common ailments and referrals.", 50),
    ("Heart Check", "ECG, lipid profile, and cardiologist review.", 180),
    ("Skin Screening", "Full-body mole check and dermatology consult.", 120),
    ("Diabetes Package", "HbA1c, endocrine consult, and diet plan.", 140),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub user_created: bool,
    pub doctors_created: usize,
    pub services_created: usize,
    pub sample_data_created: bool,
}

/// Populates demo rows. Each group is only inserted when its table (or the
/// demo user's records) is still empty, so running it twice is harmless.
pub async fn seed_demo_data(state: &AppState) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    let user = match state.user_repo.find_by_email(DEMO_EMAIL).await? {
        Some(user) => user,
        None => {
            report.user_created = true;
            state.auth_service.register(Registration {
                full_name: DEMO_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            }).await?
        }
    };

    if state.doctor_repo.count().await? == 0 {
        for (name, specialization, hospital, contact, work_hours, bio, photo) in DOCTORS {
            state.doctor_repo.create(&NewDoctor {
                name: name.to_string(),
                specialization: specialization.to_string(),
                hospital: hospital.to_string(),
                contact: contact.to_string(),
                work_hours: work_hours.to_string(),
                bio: bio.to_string(),
                photo: photo.to_string(),
                rating: DEFAULT_RATING,
            }).await?;
            report.doctors_created += 1;
        }
    }

    if state.service_repo.count().await? == 0 {
        for (name, description, price) in SERVICES {
            state.service_repo.create(&NewService {
                name: name.to_string(),
                description: description.to_string(),
                price: *price,
            }).await?;
            report.services_created += 1;
        }
    }

    if state.record_repo.count_by_user(user.id).await? == 0 {
        state.record_repo.create(&NewMedicalRecord::new(
            user.id, "Annual Physical 2024", "Normal vitals, BMI 23.1, advised regular exercise.",
        )).await?;
        state.record_repo.create(&NewMedicalRecord::new(
            user.id, "Allergy Panel", "Mild pollen allergy; prescribed antihistamines as needed.",
        )).await?;
        state.prescription_repo.create(&NewPrescription::new(
            user.id, "Dr. Sarah Johnson", "Atorvastatin 10mg", "1 tab daily", "Take at night.",
        )).await?;
        state.invoice_repo.create(
            &NewInvoice::new(user.id, "General Consultation", 50).with_status(InvoiceStatus::Paid),
        ).await?;

        if let Some(doctor) = state.doctor_repo.find_by_name("Dr. Sarah Johnson").await? {
            state.appointment_repo.create(&NewAppointment {
                user_id: user.id,
                doctor_id: doctor.id,
                date: Local::now().date_naive(),
                time: NaiveTime::from_hms_opt(15, 0, 0).ok_or(AppError::Internal)?,
                reason: Some("Follow-up".to_string()),
            }).await?;
        }
        report.sample_data_created = true;
    }

    info!(
        user_created = report.user_created,
        doctors = report.doctors_created,
        services = report.services_created,
        sample_data = report.sample_data_created,
        "Seed complete"
    );
    Ok(report)
}
