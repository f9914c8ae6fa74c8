//! Static educational copy shown under a verdict.

pub struct Entry {
    pub name: &'static str,
    pub detail: &'static str,
}

pub struct Link {
    pub title: &'static str,
    pub url: &'static str,
}

pub const TUMOR_TYPES_HEADING: &str = "Types of Brain Tumors";
pub const TUMOR_TYPES_INTRO: &str = "There are several types of brain tumors, including:";

pub const TUMOR_TYPES: &[Entry] = &[
    Entry {
        name: "Gliomas",
        detail: "Tumors that arise from glial cells, which support nerve cells. Examples include astrocytomas, oligodendrogliomas, and glioblastomas.",
    },
    Entry {
        name: "Meningiomas",
        detail: "Tumors that develop from the meninges, the protective membranes covering the brain and spinal cord.",
    },
    Entry {
        name: "Pituitary adenomas",
        detail: "Tumors that occur in the pituitary gland.",
    },
    Entry {
        name: "Schwannomas",
        detail: "Tumors that arise from Schwann cells, which produce the myelin sheath that covers nerves. An example is acoustic neuroma.",
    },
    Entry {
        name: "Medulloblastomas",
        detail: "Common pediatric brain tumors that start in the lower part of the brain and can spread to the spinal cord.",
    },
    Entry {
        name: "Craniopharyngiomas",
        detail: "Rare tumors that start near the pituitary gland.",
    },
];

pub const TREATMENT_HEADING: &str = "Resources for Brain Tumor Treatment";

pub const TREATMENT_RESOURCES: &[Link] = &[
    Link {
        title: "Mayo Clinic - Brain Tumor Treatment",
        url: "https://www.mayoclinic.org/tests-procedures/brain-tumor-treatment/pyc-20384880",
    },
    Link {
        title: "Johns Hopkins Medicine - Brain Tumor Center",
        url: "https://www.hopkinsmedicine.org/neurology_neurosurgery/centers_clinics/brain_tumor/",
    },
    Link {
        title: "Cleveland Clinic - Brain Tumor Treatment",
        url: "https://my.clevelandclinic.org/health/diseases/6142-brain-tumors",
    },
    Link {
        title: "Dana-Farber Cancer Institute - Brain Tumor Center",
        url: "https://www.dana-farber.org/brain-tumor-center/",
    },
];

pub const HEALTHY_HEADING: &str = "Tips for Maintaining a Healthy Brain";
pub const HEALTHY_INTRO: &str = "A healthy diet plays a crucial role in maintaining brain health. Here are some foods that are beneficial for brain health:";

pub const BRAIN_FOODS: &[Entry] = &[
    Entry {
        name: "Fatty Fish",
        detail: "Rich in omega-3 fatty acids, essential for brain health. Examples include salmon, trout, and sardines.",
    },
    Entry {
        name: "Berries",
        detail: "Packed with antioxidants, which may help reduce inflammation and oxidative stress.",
    },
    Entry {
        name: "Nuts and Seeds",
        detail: "High in antioxidants, healthy fats, and vitamin E, all of which may benefit brain health.",
    },
    Entry {
        name: "Leafy Greens",
        detail: "Rich in antioxidants and vitamin K, important for brain health.",
    },
    Entry {
        name: "Whole Grains",
        detail: "Provide a steady supply of energy for the brain.",
    },
    Entry {
        name: "Avocados",
        detail: "Rich in healthy fats and vitamin E, which are important for brain health.",
    },
    Entry {
        name: "Dark Chocolate",
        detail: "Contains flavonoids, caffeine, and antioxidants, which may improve brain function.",
    },
    Entry {
        name: "Green Tea",
        detail: "Contains caffeine and antioxidants, which may enhance brain function and improve mood.",
    },
];
