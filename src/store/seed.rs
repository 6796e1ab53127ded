//! Seed dataset for the demo technician. In production the employee record
//! and job list would come from a server fetch keyed by the logged-in
//! employee; here they are static literals.

use time::macros::date;

use super::{Employee, Job, JobStatus};

pub(super) fn employee(id: &str) -> Option<Employee> {
    match id {
        "emp1" => Some(Employee {
            id: "emp1".to_string(),
            name: "Ramesh Patel".to_string(),
            phone: "+91 99887 76655".to_string(),
            email: "ramesh@example.com".to_string(),
            role: "Senior Technician".to_string(),
            join_date: date!(2023 - 01 - 15),
            completed_works: 45,
            active_works: 2,
            rating: 4.8,
        }),
        _ => None,
    }
}

pub(super) fn jobs(employee_id: &str) -> Vec<Job> {
    if employee_id != "emp1" {
        return Vec::new();
    }

    vec![
        Job {
            id: 1,
            client_name: "Rajesh Kumar".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 MG Road, Bangalore - 560001".to_string(),
            date: date!(2025 - 12 - 15),
            job_type: "New Installation".to_string(),
            camera_count: 8,
            status: JobStatus::Upcoming,
            estimated_cost: 45000,
            notes: Some("4 dome cameras, 4 bullet cameras with NVR".to_string()),
            tools: tools(&[
                "Dome Camera x4",
                "Bullet Camera x4",
                "NVR 16 Channel",
                "Cat6 Cable",
                "Power Supply 12V x8",
            ]),
            progress: None,
            completed_date: None,
            work_notes: None,
        },
        Job {
            id: 2,
            client_name: "Tech Solutions Pvt Ltd".to_string(),
            phone: "+91 98765 43212".to_string(),
            address: "789 Whitefield, Bangalore - 560066".to_string(),
            date: date!(2025 - 12 - 13),
            job_type: "New Installation".to_string(),
            camera_count: 16,
            status: JobStatus::InProgress,
            estimated_cost: 95000,
            notes: Some("Complete office surveillance system with 16 cameras".to_string()),
            tools: tools(&[
                "Dome Camera x10",
                "Bullet Camera x6",
                "NVR 16 Channel",
                "Cat6 Cable x2",
                "Power Supply 12V x16",
            ]),
            progress: Some(65),
            completed_date: None,
            work_notes: None,
        },
        Job {
            id: 3,
            client_name: "Sharma Residency".to_string(),
            phone: "+91 98765 43215".to_string(),
            address: "456 Jayanagar, Bangalore - 560041".to_string(),
            date: date!(2025 - 12 - 08),
            job_type: "Maintenance".to_string(),
            camera_count: 6,
            status: JobStatus::Completed,
            estimated_cost: 8000,
            notes: Some("Quarterly maintenance and cleaning".to_string()),
            tools: None,
            progress: None,
            completed_date: Some(date!(2025 - 12 - 08)),
            work_notes: None,
        },
        Job {
            id: 4,
            client_name: "Green Valley Apartments".to_string(),
            phone: "+91 98765 43216".to_string(),
            address: "321 HSR Layout, Bangalore - 560102".to_string(),
            date: date!(2025 - 12 - 05),
            job_type: "New Installation".to_string(),
            camera_count: 12,
            status: JobStatus::Completed,
            estimated_cost: 72000,
            notes: Some("Apartment complex surveillance".to_string()),
            tools: None,
            progress: None,
            completed_date: Some(date!(2025 - 12 - 05)),
            work_notes: None,
        },
        Job {
            id: 5,
            client_name: "Retail Store - MG Road".to_string(),
            phone: "+91 98765 43217".to_string(),
            address: "654 MG Road, Bangalore - 560001".to_string(),
            date: date!(2025 - 12 - 01),
            job_type: "Repair".to_string(),
            camera_count: 3,
            status: JobStatus::Completed,
            estimated_cost: 5000,
            notes: Some("Replace faulty cameras".to_string()),
            tools: None,
            progress: None,
            completed_date: Some(date!(2025 - 12 - 01)),
            work_notes: None,
        },
    ]
}

fn tools(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| item.to_string()).collect())
}
