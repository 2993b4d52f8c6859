//! The four showcased projects, in display order.

use super::Project;

pub(super) static PROJECTS: [Project; 4] = [
    Project {
        id: "project-1",
        category: "Residential Complex",
        title: "Building & Infrastructure Twins",
        image: "res/service1.png",
        overview: "Project Description\n\
            Our comprehensive smart building optimization project transformed a global office complex into an energy-efficient, intelligent workspace. By implementing our advanced digital twin platform, we created a virtual replica of the entire building infrastructure, enabling real-time monitoring and optimization of HVAC systems, lighting, and energy consumption patterns. The project resulted in a remarkable 28% reduction in energy consumption while maintaining optimal comfort levels for occupants.\n\
            \n\
            Project Overview\n\
            Our digital twin projects cover a full lifecycle approach:\n\
            \n\
            Buildings: Residential, commercial, or public buildings can be digitally mirrored for operational efficiency.\n\
            \n\
            Infrastructure: Bridges, roads, and utilities are modeled to monitor performance, resilience, and future upgrades.\n\
            \n\
            Urban context: Every project is connected to its geospatial environment, enabling better city-scale planning.",
        challenge: "The Challenges\n\
            •\n\
            Managing complex buildings and infrastructure comes with big challenges:\n\
            •\n\
            Fragmented data scattered across drawings, BIM models, and monitoring systems.\n\
            •\n\
            Limited visibility into performance, energy consumption, and maintenance needs.\n\
            •\n\
            Difficulty simulating future scenarios such as expansions, traffic changes, or energy upgrades.\n\
            •\n\
            Slow decision-making due to reliance on static reports instead of live, interactive insights.",
        solution: "Our Solutions\n\
            •\n\
            We develop Building & Infrastructure Digital Twins that merge design data, real-time sensor inputs, and geospatial context into one interactive 3D environment.\n\
            •\n\
            Structured, georeferenced 3D models ready for digital twin platforms.\n\
            •\n\
            IoT & sensor integration for monitoring energy, occupancy, and safety in real time.\n\
            •\n\
            Simulation & scenario testing to predict impacts of design or operational changes.\n\
            •\n\
            User-friendly dashboards & 3D navigation for facility managers, planners, and stakeholders.",
        results: "Resolution & Impact\n\
            By turning static assets into living, digital replicas, we help clients achieve:\n\
            \n\
            Smarter operations → Lower energy costs, predictive maintenance, and optimized resource use.\n\
            \n\
            Informed decision-making → Clear visualization and reliable data drive better investments.\n\
            \n\
            Sustainability goals → Track and reduce carbon footprint effectively.\n\
            \n\
            Public engagement → Citizens and stakeholders understand projects through clear 3D communication.\n\
            \n\
            Outcome: 28% reduction in energy consumption and improved operational efficiency.",
        client: "Private Developer",
        industry: "Real Estate",
        duration: "8 months",
        year: "2024",
        technologies: &[
            "IoT Integration",
            "BIM",
            "Machine Learning",
            "Real-time Analytics",
            "Cloud Computing",
        ],
        services: &[
            "3D Modeling & Visualization",
            "IoT Sensor Integration",
            "Predictive Analytics",
            "Energy Management System",
            "Maintenance Dashboard",
            "Mobile App Development",
        ],
        gallery: &[
            "res/work1.png",
            "res/work11.png",
            "res/work12.png",
            "res/work43.png",
        ],
    },
    Project {
        id: "project-2",
        category: "Villa",
        title: "Hyper-Realistic Visuals",
        image: "res/service2.png",
        overview: "Project Description\n\
            We partnered with a leading automotive manufacturer to create a comprehensive digital twin of their assembly line operations. This project involved mapping every aspect of the production process, from individual machine performance to overall workflow optimization. The digital twin enabled predictive maintenance, real-time process monitoring, and data-driven decision making.\n\
            \n\
            Project Overview\n\
            Our visuals are tailored to different project types:\n\
            \n\
            Interior spaces with styled furniture, textures, and lighting mood boards.\n\
            \n\
            Exterior architecture including realistic landscapes, urban surroundings, and climate effects.\n\
            \n\
            Marketing-ready packages for brochures, presentations, and online campaigns.\n\
            \n\
            Custom interactive experiences that add engagement to exhibitions or client pitches.",
        challenge: "The Challenges\n\
            •\n\
            Architectural ideas often fail to impress when shown as plain drawings or technical models.\n\
            •\n\
            Investors and clients struggle to imagine the final look and feel of a project.\n\
            •\n\
            Marketing materials can feel flat without high-quality visuals to inspire confidence.\n\
            •\n\
            Adjusting designs late in the process becomes costly and time-consuming.",
        solution: "Our Solutions\n\
            •\n\
            We create hyper-realistic 3D visuals that bridge imagination and reality:\n\
            •\n\
            Photorealistic still renders that capture every material, shadow, and reflection.\n\
            •\n\
            Cinematic animations that showcase projects with storytelling and atmosphere.\n\
            •\n\
            Interactive scenes where clients can explore spaces, change options, or view from different perspectives.\n\
            •\n\
            Fast iteration cycles to test materials, lighting, and layouts before construction begins.",
        results: "Resolution & Impact\n\
            By turning ideas into immersive visual experiences, we deliver:\n\
            \n\
            Stronger marketing tools → Designs that sell themselves before construction.\n\
            \n\
            Better decision-making → Stakeholders can see and feel the project, not just imagine it.\n\
            \n\
            Cost savings → Detect design conflicts and material mismatches early.\n\
            \n\
            Memorable presentations → Images and animations that stand out and win projects.",
        client: "Luxury Real Estate Developer",
        industry: "Residential",
        duration: "5 months",
        year: "2024",
        technologies: &[
            "Unreal Engine",
            "Ray Tracing",
            "VR/AR",
            "3D Scanning",
            "Real-time Rendering",
        ],
        services: &[
            "Photorealistic 3D Rendering",
            "Interactive Walkthroughs",
            "Virtual Reality Experience",
            "Material Customization",
            "Lighting Simulation",
            "Animation & Videos",
        ],
        gallery: &[
            "res/work2.png",
            "res/work21.png",
            "res/work22.png",
            "res/work23.png",
        ],
    },
    Project {
        id: "project-3",
        category: "North European Metropolitan Authority",
        title: "Urban Planning Digital Twin",
        image: "res/service3.png",
        overview: "Project Description\n\
            This innovative urban planning project transformed traditional city visualization into an immersive, game-style navigation experience. Working with the Metropolitan Transportation Authority, we created a comprehensive digital twin of urban infrastructure that allows stakeholders to explore and analyze transportation networks through an interactive 3D environment built in Unreal Engine.\n\
            \n\
            Project Overview\n\
            Our approach covers:\n\
            \n\
            Urban planning twins → Modeling districts, neighborhoods, and transport systems.\n\
            \n\
            Environmental twins → Simulating ecosystems, water flows, and renewable energy potential.\n\
            \n\
            Regional scale integration → Linking cities with surrounding landscapes for holistic impact analysis.\n\
            \n\
            Public participation tools → Interactive 3D maps and VR demos for better community engagement.",
        challenge: "The Challenges\n\
            •\n\
            Cities and regions face growing pressure from climate change, rapid urbanization, and resource management.\n\
            •\n\
            Traditional maps and reports lack the ability to fully capture dynamic environmental processes like air quality, flooding, or traffic emissions.\n\
            •\n\
            Decision-making often happens in silos, with fragmented data spread across agencies and stakeholders.\n\
            •\n\
            Engaging citizens and policymakers is difficult when complex data isn’t visualized clearly.",
        solution: "Our Solutions\n\
            •\n\
            We build Urban & Environment Digital Twins that connect geospatial data, 3D city models, and live environmental inputs into one interactive platform.\n\
            •\n\
            City-scale 3D twins that integrate buildings, infrastructure, and natural landscapes.\n\
            •\n\
            Environmental simulations (air quality, noise, flooding, energy use, mobility).\n\
            •\n\
            Scenario testing for climate adaptation, zoning, and sustainable growth strategies.\n\
            •\n\
            Citizen-facing dashboards that make data transparent, interactive, and easy to understand.",
        results: "Resolution & Impact\n\
            Urban & Environment Twins enable cities and organizations to:\n\
            \n\
            Plan sustainably → Reduce emissions, optimize mobility, and protect green areas.\n\
            \n\
            Mitigate risks → Anticipate flooding, heatwaves, or pollution hotspots before they happen.\n\
            \n\
            Collaborate better → Unite planners, engineers, and citizens around a shared digital environment.\n\
            \n\
            Build trust → Transparent and visual communication strengthens public acceptance of projects.",
        client: "Metropolitan Planning Authority",
        industry: "Urban Development",
        duration: "12 months",
        year: "2023-2024",
        technologies: &[
            "Unreal Engine",
            "GIS Integration",
            "Traffic Simulation",
            "Environmental Modeling",
            "Big Data Analytics",
        ],
        services: &[
            "Urban 3D Modeling",
            "Traffic Flow Simulation",
            "Environmental Impact Analysis",
            "Public Engagement Tools",
            "Scenario Planning",
            "Data Visualization",
        ],
        gallery: &[
            "res/work3.png",
            "res/work51.png",
            "res/work32.png",
            "res/work5.png",
        ],
    },
    Project {
        id: "project-4",
        category: "University Parking, Government Building",
        title: "AI-Enhanced Analytics",
        image: "res/service4.png",
        overview: "Project Description\n\
            This innovative urban planning project transformed traditional city visualization into an immersive, game-style navigation experience. Working with the Metropolitan Transportation Authority, we created a comprehensive digital twin of urban infrastructure that allows stakeholders to explore and analyze transportation networks through an interactive 3D environment built in Unreal Engine.\n\
            \n\
            Project Overview\n\
            Our AI-enhanced analytics can be applied across scales:\n\
            \n\
            Smart Buildings → Optimize HVAC, lighting, occupancy flows, and predictive maintenance.\n\
            \n\
            Smart Cities → Enhance traffic management, public safety, energy distribution, and sustainability tracking.\n\
            \n\
            Integrated Digital Twins → Combine real-time sensor data with AI simulations for what-if scenario testing.",
        challenge: "The Challenges\n\
            •\n\
            Cities and building operators generate huge volumes of data from sensors, IoT devices, and management systems.\n\
            •\n\
            Without AI, much of this data stays underutilized, offering little insight for real-time decisions.\n\
            •\n\
            Complex systems (traffic, energy, utilities, building operations) are difficult to predict and optimize manually.\n\
            •\n\
            Stakeholders need clear insights instead of raw data streams.",
        solution: "Our Solutions\n\
            •\n\
            We integrate AI-driven analytics directly into Digital Twin platforms, turning data into actionable intelligence:\n\
            •\n\
            Predictive analytics → Anticipate maintenance needs, energy peaks, or traffic bottlenecks before they occur.\n\
            •\n\
            Anomaly detection → Identify unusual patterns in energy use, safety systems, or environmental conditions.\n\
            •\n\
            Optimization algorithms → Suggest efficient layouts, zoning changes, or building operations strategies.\n\
            •\n\
            AI-powered dashboards → Simplify complex data into clear KPIs and visual reports for decision-makers.",
        results: "Resolution & Impact\n\
            By embedding AI into Digital Twins, we deliver:\n\
            \n\
            • Smarter decisions → Real-time data translated into reliable forecasts and recommendations.\n\
            \n\
            • Operational savings → Lower maintenance costs, reduced downtime, and optimized resource use.\n\
            \n\
            • Sustainability gains → Better energy efficiency and measurable carbon footprint reductions.\n\
            \n\
            • Future readiness → Systems that continuously learn and improve as more data flows in.",
        client: "State University & Government",
        industry: "Smart Infrastructure",
        duration: "10 months",
        year: "2024",
        technologies: &[
            "AI/ML",
            "Solar Energy Management",
            "EV Charging Systems",
            "IoT Sensors",
            "Predictive Analytics",
        ],
        services: &[
            "Automated Parking System",
            "Solar Panel Optimization",
            "EV Charging Management",
            "Energy Cost Analysis",
            "User Mobile App",
            "Digital Twin Platform",
        ],
        gallery: &[
            "res/work4.png",
            "res/work41.png",
            "res/work42.png",
            "res/work43.png",
        ],
    },
];
