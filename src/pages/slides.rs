use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::slide_frame::SlideFrame;
use crate::deck::slide_id::SlideIndex;

/// The deck's slides in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    Title,
    Analysis,
    BusinessImpact,
    StrategyOverview,
    PhaseOne,
    PhaseTwo,
    PhaseThree,
    PhaseFour,
    PhaseFive,
    Integration,
    Outcomes,
    NextSteps,
}

impl Slide {
    pub const ALL: [Slide; 12] = [
        Slide::Title,
        Slide::Analysis,
        Slide::BusinessImpact,
        Slide::StrategyOverview,
        Slide::PhaseOne,
        Slide::PhaseTwo,
        Slide::PhaseThree,
        Slide::PhaseFour,
        Slide::PhaseFive,
        Slide::Integration,
        Slide::Outcomes,
        Slide::NextSteps,
    ];

    pub fn render(self, index: SlideIndex, id_prefix: &str) -> Html {
        let id = AttrValue::from(index.element_id(id_prefix));
        match self {
            Slide::Title => html! { <TitleSlide key={index.get()} id={id} index={index} /> },
            Slide::Analysis => html! { <AnalysisSlide key={index.get()} id={id} index={index} /> },
            Slide::BusinessImpact => html! { <BusinessImpactSlide key={index.get()} id={id} index={index} /> },
            Slide::StrategyOverview => html! { <StrategyOverviewSlide key={index.get()} id={id} index={index} /> },
            Slide::PhaseOne => html! { <PhaseOneSlide key={index.get()} id={id} index={index} /> },
            Slide::PhaseTwo => html! { <PhaseTwoSlide key={index.get()} id={id} index={index} /> },
            Slide::PhaseThree => html! { <PhaseThreeSlide key={index.get()} id={id} index={index} /> },
            Slide::PhaseFour => html! { <PhaseFourSlide key={index.get()} id={id} index={index} /> },
            Slide::PhaseFive => html! { <PhaseFiveSlide key={index.get()} id={id} index={index} /> },
            Slide::Integration => html! { <IntegrationSlide key={index.get()} id={id} index={index} /> },
            Slide::Outcomes => html! { <OutcomesSlide key={index.get()} id={id} index={index} /> },
            Slide::NextSteps => html! { <NextStepsSlide key={index.get()} id={id} index={index} /> },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideProps {
    pub id: AttrValue,
    pub index: SlideIndex,
}

fn dash_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="dash-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

fn source(text: &'static str) -> Html {
    html! { <p class="source">{text}</p> }
}

#[function_component(TitleSlide)]
pub fn title_slide(props: &SlideProps) -> Html {
    html! {
        <SlideFrame id={props.id.clone()} index={props.index} numbered={false}>
            <div class="title-block">
                <Reveal delay={100}>
                    <div class="eyebrow">{"Strategy For"}</div>
                </Reveal>
                <Reveal delay={200}>
                    <div class="client-name">{"F.F. Foundation Ltd."}</div>
                </Reveal>
                <Reveal delay={300}>
                    <h1>{"Brand & Digital"}<br />{"Transformation"}</h1>
                </Reveal>
                <Reveal delay={400}>
                    <p class="tagline">{"Aligning market identity with world-class medical infrastructure"}</p>
                </Reveal>
            </div>
        </SlideFrame>
    }
}

#[function_component(AnalysisSlide)]
pub fn analysis_slide(props: &SlideProps) -> Html {
    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Current State Analysis"}</h2>
            </Reveal>
            <div class="grid two">
                <Reveal delay={200}>
                    <h3 class="column-title">{"Your Capabilities"}</h3>
                    { dash_list(&[
                        "30 years of healthcare infrastructure experience",
                        "Schaerer OT Tables (Swiss)",
                        "Austofix Orthopedics (Australia)",
                        "German Modular Hospital Solutions",
                        "Prestigious client portfolio",
                    ]) }
                </Reveal>
                <Reveal delay={400}>
                    <h3 class="column-title">{"Market Perception Gap"}</h3>
                    { dash_list(&[
                        "Inconsistent brand messaging",
                        "Website UX requires modernization",
                        "Limited thought leadership presence",
                        "Visual identity lags behind premium positioning",
                    ]) }
                </Reveal>
            </div>
            <Reveal delay={600} class="callout-center">
                <p class="lead">
                    <strong>{"94% of B2B buyers perform online research before purchasing."}</strong><br />
                    {"Your digital presence is the first—and most critical—touchpoint."}
                </p>
                { source("Source: Accenture B2B Procurement Study") }
            </Reveal>
        </SlideFrame>
    }
}

#[function_component(BusinessImpactSlide)]
pub fn business_impact_slide(props: &SlideProps) -> Html {
    let stats = [
        ("33%", "Revenue increase attributed to brand consistency", "Marq: State of Brand Consistency", 200u32),
        ("83%", "Of B2B buyers prefer digital commerce channels", "Gartner Sales Survey 2022", 300),
        ("77%", "Research independently before contacting sales", "Saleslion / CEB Global", 400),
    ];

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"The Business Impact"}</h2>
            </Reveal>
            <div class="grid three">
                {
                    for stats.iter().map(|(num, label, src, delay)| html! {
                        <Reveal key={*num} delay={*delay} class="fill">
                            <div class="card stat">
                                <div class="stat-number">{*num}</div>
                                <div class="stat-label">{*label}</div>
                                { source(*src) }
                            </div>
                        </Reveal>
                    })
                }
            </div>
            <Reveal delay={500}>
                <div class="card quote-bar">
                    <p>
                        {"In medical procurement, credibility drives decisions. Healthcare administrators and surgeons rely heavily on digital research to evaluate potential partners. A cohesive brand identity signals reliability and professionalism—essential qualities when dealing with life-critical infrastructure."}
                    </p>
                </div>
            </Reveal>
        </SlideFrame>
    }
}

#[function_component(StrategyOverviewSlide)]
pub fn strategy_overview_slide(props: &SlideProps) -> Html {
    let phases = [
        ("Brand Audit", "Analyze competitive positioning and stakeholder perception"),
        ("Visual Identity Refresh", "Develop cohesive brand system reflecting precision and authority"),
        ("PR & Communications Strategy", "Position leadership through thought leadership and case studies"),
        ("Catalogue Redesign", "Create professional reference materials for sales teams"),
        ("Website Redesign", "Build digital showroom optimized for the B2B buyer journey"),
    ];

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Strategic Approach"}</h2>
                <p class="subtitle">{"Five integrated initiatives to strengthen market positioning"}</p>
            </Reveal>
            <ul class="step-list">
                {
                    for phases.iter().enumerate().map(|(i, (title, desc))| html! {
                        <Reveal key={i} delay={i as u32 * 100}>
                            <li class="card step">
                                <span class="step-badge">{i + 1}</span>
                                <div>
                                    <strong>{*title}</strong>
                                    <span>{*desc}</span>
                                </div>
                            </li>
                        </Reveal>
                    })
                }
            </ul>
        </SlideFrame>
    }
}

#[function_component(PhaseOneSlide)]
pub fn phase_one_slide(props: &SlideProps) -> Html {
    let rows = [
        ("Competitive Analysis", "Market positioning map", "Identify differentiation opportunities vs. local and international competitors"),
        ("Messaging Review", "Verbal identity assessment", "Align tone and language with professional medical standards"),
        ("Stakeholder Input", "Perception interviews", "Understand how decision-makers currently view F.F. Foundation"),
    ];

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Phase 1: Brand Audit"}</h2>
                <h3 class="kicker">{"Foundation for informed decisions"}</h3>
            </Reveal>
            <Reveal delay={200} class="wide">
                <div class="card table-card">
                    <table>
                        <thead>
                            <tr>
                                <th>{"Focus Area"}</th>
                                <th>{"Deliverable"}</th>
                                <th class="value-column">{"Value"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for rows.iter().map(|(area, deliverable, value)| html! {
                                    <tr key={*area}>
                                        <td class="area">{*area}</td>
                                        <td>{*deliverable}</td>
                                        <td class="light">{*value}</td>
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                </div>
            </Reveal>
            <Reveal delay={400} class="narrow">
                <div class="card plain">
                    <p class="quote">
                        {"\"A brand audit provides data-driven insights rather than subjective opinions. This ensures subsequent investments address actual market perception gaps, not assumptions.\""}
                    </p>
                </div>
            </Reveal>
        </SlideFrame>
    }
}

const PHASE_TWO_VIDEO: &str =
    "https://5efocrpdcf1ikwvu.public.blob.vercel-storage.com/grok-video-0c79ecb7-5355-49bc-b325-109b9410efdc.mp4";

#[function_component(PhaseTwoSlide)]
pub fn phase_two_slide(props: &SlideProps) -> Html {
    let video_ref = use_node_ref();

    // Autoplay is only allowed for muted media.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_default_muted(true);
                    video.set_muted(true);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Phase 2: Visual Identity Refresh"}</h2>
                <h3 class="kicker">{"Creating visual consistency"}</h3>
            </Reveal>
            <div class="grid two media">
                <div class="stack">
                    <Reveal delay={200}>
                        <div class="card">
                            <h3 class="card-title">{"Brand System Components"}</h3>
                            <ul class="bullet-list">
                                <li>{"Logo refinement to reflect modern medical infrastructure"}</li>
                                <li>{"Professional color palette suited to healthcare environments"}</li>
                                <li>{"Typography system for technical documentation"}</li>
                                <li>{"Comprehensive brand guidelines for all touchpoints"}</li>
                            </ul>
                        </div>
                    </Reveal>
                    <Reveal delay={300}>
                        <div class="card accent-edge">
                            <h3 class="card-title">{"Expected Outcome"}</h3>
                            <p>{"Consistent brand presentation across email signatures, presentations, on-site signage, and digital platforms. Every interaction reinforces professionalism and reliability."}</p>
                        </div>
                    </Reveal>
                    <Reveal delay={400}>
                        <p class="insight">
                            <strong>{"Research insight:"}</strong>
                            {" Organizations with consistent brand presentation are 3-4 times more likely to achieve excellent brand visibility."}
                        </p>
                        { source("Source: Marq Brand Consistency Study") }
                    </Reveal>
                </div>
                <Reveal delay={300} class="fill">
                    <div class="video-frame">
                        <video ref={video_ref} autoplay={true} loop={true} muted={true} playsinline={true}>
                            <source src={PHASE_TWO_VIDEO} type="video/mp4" />
                            {"Your browser does not support the video tag."}
                        </video>
                        <div class="video-caption">
                            <div class="video-caption-title">{"Proposed Visual Language"}</div>
                            <div class="video-caption-sub">{"Modern, Clean, Clinical Precision"}</div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </SlideFrame>
    }
}

#[function_component(PhaseThreeSlide)]
pub fn phase_three_slide(props: &SlideProps) -> Html {
    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Phase 3: PR & Communications"}</h2>
                <h3 class="kicker">{"Building credibility and visibility"}</h3>
            </Reveal>
            <div class="grid two">
                <Reveal delay={200} class="fill">
                    <div class="card roomy">
                        <h3 class="card-title">{"Content Strategy"}</h3>
                        <p class="labelled"><strong>{"Thought Leadership"}</strong>{"Articles by leadership on healthcare infrastructure"}</p>
                        <p class="labelled"><strong>{"Case Studies"}</strong>{"Document successful installations with narrative details"}</p>
                        <p class="labelled"><strong>{"Media Relations"}</strong>{"Secure coverage for major milestones and partnerships"}</p>
                    </div>
                </Reveal>
                <Reveal delay={400} class="fill">
                    <div class="card roomy">
                        <h3 class="card-title">{"Distribution Channels"}</h3>
                        <ul class="bullet-list">
                            <li>{"LinkedIn for direct access to hospital decision-makers"}</li>
                            <li>{"Industry publications relevant to the healthcare sector"}</li>
                            <li>{"Targeted email communications with value-driven content"}</li>
                        </ul>
                    </div>
                </Reveal>
            </div>
            <Reveal delay={600} class="narrow">
                <div class="ruled">
                    <p>
                        <strong>{"B2B buyer behavior:"}</strong>
                        {" The average B2B buyer consumes 13 pieces of content during their purchasing journey—8 from vendors and 5 from third-party sources."}
                    </p>
                    { source("Source: FocusVision Content Consumption Study") }
                </div>
            </Reveal>
        </SlideFrame>
    }
}

#[function_component(PhaseFourSlide)]
pub fn phase_four_slide(props: &SlideProps) -> Html {
    let items = [
        ("Premium Materials", "High-quality paper and binding that positions the catalogue as a reference document rather than disposable marketing material."),
        ("Technical Clarity", "Clear schematics, high-resolution photography, and factual specifications prioritized over marketing language."),
        ("Solution-Based", "Organized by hospital need (Surgical Suite, Sterilization) rather than by manufacturer for easier navigation."),
    ];

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Phase 4: Catalogue Design"}</h2>
                <h3 class="kicker">{"Professional sales materials"}</h3>
            </Reveal>
            <div class="grid three">
                {
                    for items.iter().enumerate().map(|(i, (title, desc))| html! {
                        <Reveal key={i} delay={i as u32 * 150}>
                            <div class="card">
                                <h3 class="card-title">{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </Reveal>
                    })
                }
            </div>
            <Reveal delay={600}>
                <p class="quote">
                    {"\"The catalogue often represents the final touchpoint before contract discussions. Its quality should reflect the precision of the equipment being offered.\""}
                </p>
            </Reveal>
        </SlideFrame>
    }
}

#[function_component(PhaseFiveSlide)]
pub fn phase_five_slide(props: &SlideProps) -> Html {
    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Phase 5: Website Redesign"}</h2>
                <h3 class="kicker">{"Digital showroom for B2B buyers"}</h3>
            </Reveal>
            <div class="grid two">
                <Reveal delay={200}>
                    <div class="card roomy">
                        <h3 class="card-title">{"User Experience (UX)"}</h3>
                        { dash_list(&[
                            "Responsive design optimized for tablets and mobile",
                            "Intuitive navigation with clear information architecture",
                            "Fast loading times and clean visual hierarchy",
                            "Solution-based content organization",
                        ]) }
                    </div>
                </Reveal>
                <Reveal delay={400}>
                    <div class="card roomy accent-edge">
                        <h3 class="card-title">{"Trust Elements"}</h3>
                        { dash_list(&[
                            "Client testimonials prominently featured",
                            "Partner logos and certifications visible",
                            "30-year heritage highlighted",
                            "Case studies with detailed project information",
                        ]) }
                    </div>
                </Reveal>
            </div>
            <Reveal delay={600} class="narrow">
                <div class="tinted">
                    <p>
                        <strong>{"Critical context:"}</strong>
                        {" 70% of the B2B buying process is completed online before a supplier is contacted. Your website needs to answer questions and build confidence independently."}
                    </p>
                    { source("Source: Sopro / Forrester Research") }
                </div>
            </Reveal>
        </SlideFrame>
    }
}

#[function_component(IntegrationSlide)]
pub fn integration_slide(props: &SlideProps) -> Html {
    let risks = [
        ("Website without brand", "Improved UX but inconsistent identity confuses users"),
        ("PR without website", "Generates traffic without conversion infrastructure"),
        ("Catalogue with old brand", "Sends mixed signals to prospects about modernization"),
    ];

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2>{"Why An Integrated Approach?"}</h2>
                <p class="subtitle">{"These initiatives build on each other sequentially for maximum impact"}</p>
            </Reveal>
            <div class="column">
                <Reveal delay={200}>
                    <div class="card quote-bar roomy">
                        <h3 class="card-title large">{"Sequential Build"}</h3>
                        <div class="grid two tight">
                            <p>{"The audit informs the brand refresh. The brand refresh guides the website, catalogue, and communications design. The PR strategy launches the new positioning into the market."}</p>
                            <p>{"Each phase depends on insights and deliverables from the previous one, ensuring alignment and efficiency. Disconnected efforts waste budget and dilute impact."}</p>
                        </div>
                    </div>
                </Reveal>
                <Reveal delay={400}>
                    <div class="card roomy">
                        <h3 class="card-title large">{"Partial Implementation Risks"}</h3>
                        <div class="grid three tight">
                            {
                                for risks.iter().map(|(title, desc)| html! {
                                    <div key={*title} class="risk">
                                        <strong>{*title}</strong>
                                        <p>{*desc}</p>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>
            </div>
        </SlideFrame>
    }
}

#[function_component(OutcomesSlide)]
pub fn outcomes_slide(props: &SlideProps) -> Html {
    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2 class="spaced">{"Expected Outcomes"}</h2>
            </Reveal>
            <div class="grid three">
                <Reveal delay={200} class="fill">
                    <div class="card stat">
                        <div class="outcome accent">{"Measurable"}</div>
                        <div class="divider"></div>
                        <div class="stat-label">{"Increase in qualified lead generation from improved digital presence"}</div>
                    </div>
                </Reveal>
                <Reveal delay={300} class="fill">
                    <div class="card stat">
                        <div class="outcome accent">{"Sustained"}</div>
                        <div class="divider"></div>
                        <div class="stat-label">{"Revenue growth from consistent brand positioning and market trust"}</div>
                    </div>
                </Reveal>
                <Reveal delay={400} class="fill">
                    <div class="card stat">
                        <div class="outcome">{"3.5x"}</div>
                        <div class="divider"></div>
                        <div class="stat-label">{"Improved brand visibility vs inconsistent competitors"}</div>
                        { source("Source: Marq Brand Report") }
                    </div>
                </Reveal>
            </div>
            <div class="grid two">
                <Reveal delay={500}>
                    <div class="card">
                        <h3 class="card-title">{"Business Benefits"}</h3>
                        <ul class="bullet-list">
                            <li>{"Enhanced market credibility"}</li>
                            <li>{"Stronger partner relationships"}</li>
                            <li>{"Improved competitive positioning"}</li>
                            <li>{"Foundation for sustainable growth"}</li>
                        </ul>
                    </div>
                </Reveal>
                <Reveal delay={600}>
                    <div class="card accent-edge">
                        <h3 class="card-title">{"Timeline Estimates"}</h3>
                        <ul class="timeline">
                            <li><span>{"Phases 1-2"}</span><span class="when">{"8-10 weeks"}</span></li>
                            <li><span>{"Phases 3-5"}</span><span class="when">{"12-14 weeks"}</span></li>
                            <li><span>{"Full implementation"}</span><span class="when">{"5-6 months"}</span></li>
                            <li class="total"><span>{"Market impact visible"}</span><span class="when accent">{"12-18 months"}</span></li>
                        </ul>
                    </div>
                </Reveal>
            </div>
        </SlideFrame>
    }
}

#[function_component(NextStepsSlide)]
pub fn next_steps_slide(props: &SlideProps) -> Html {
    let steps = [
        ("Approval", "Review and approve strategic framework"),
        ("Foundation", "Initiate Phase 1 (Brand Audit) for data"),
        ("Planning", "Develop detailed project plan and timeline"),
        ("Execution", "Begin sequential implementation"),
    ];
    let last = steps.len() - 1;

    html! {
        <SlideFrame id={props.id.clone()} index={props.index}>
            <Reveal>
                <h2 class="spaced">{"Recommended Next Steps"}</h2>
            </Reveal>
            <div class="column">
                <Reveal delay={200}>
                    <div class="card quote-bar roomy">
                        <h3 class="card-title large">{"Strategic Priority"}</h3>
                        <p class="lead">{"F.F. Foundation's operational excellence and product quality deserve a brand identity that matches. The gap between capability and market perception represents both a risk and an opportunity."}</p>
                    </div>
                </Reveal>
                <Reveal delay={400}>
                    <div class="card plain roomy">
                        <h3 class="path-title">{"Proposed Path Forward"}</h3>
                        <div class="grid two tight">
                            {
                                for steps.iter().enumerate().map(|(i, (title, desc))| html! {
                                    <div key={i} class="path-step">
                                        <span class={classes!("step-badge", "small", (i != last).then(|| "muted"))}>{i + 1}</span>
                                        <div>
                                            <strong>{*title}</strong>
                                            <span>{*desc}</span>
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>
            </div>
        </SlideFrame>
    }
}

/// Shared slide typography and card styles.
#[function_component(SlideStyles)]
pub fn slide_styles() -> Html {
    html! {
        <style>
            {r#"
                .slide {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 6rem 3rem;
                    scroll-snap-align: start;
                    box-sizing: border-box;
                }
                .slide-number {
                    position: absolute;
                    top: 6rem;
                    right: 3rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #d1d5db;
                    letter-spacing: 0.1em;
                }
                .slide h1 {
                    font-size: 4.5rem;
                    font-weight: 300;
                    line-height: 1.15;
                    letter-spacing: -0.02em;
                    margin: 0 0 2rem 0;
                }
                .slide h2 {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: -0.01em;
                    text-align: center;
                    margin: 0 0 3rem 0;
                }
                .slide h2.spaced {
                    margin-bottom: 4rem;
                }
                .title-block {
                    text-align: center;
                }
                .eyebrow {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #999;
                    letter-spacing: 4px;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .client-name {
                    font-size: 1.25rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 2rem;
                }
                .tagline {
                    font-size: 1.25rem;
                    color: #888;
                    font-weight: 300;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .subtitle {
                    text-align: center;
                    color: #999;
                    font-weight: 300;
                    margin: -2.25rem 0 3rem 0;
                }
                .kicker {
                    font-size: 0.875rem;
                    color: #999;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    text-align: center;
                    margin: -2.5rem 0 3rem 0;
                }
                .grid {
                    display: grid;
                    gap: 2rem;
                    width: 100%;
                    max-width: 72rem;
                    margin-bottom: 2.5rem;
                }
                .grid.two { grid-template-columns: repeat(2, 1fr); }
                .grid.three { grid-template-columns: repeat(3, 1fr); }
                .grid.tight { gap: 1.5rem; margin-bottom: 0; }
                .grid.media { align-items: center; }
                .column, .narrow, .wide {
                    width: 100%;
                }
                .column { max-width: 56rem; display: flex; flex-direction: column; gap: 1.5rem; }
                .narrow { max-width: 48rem; margin-top: 2.5rem; }
                .wide { max-width: 64rem; }
                .stack { display: flex; flex-direction: column; gap: 1.5rem; }
                .fill { height: 100%; }
                .card {
                    background: #f8f8f6;
                    border: 1px solid transparent;
                    border-radius: 0.5rem;
                    padding: 2rem;
                    height: 100%;
                    box-sizing: border-box;
                    transition: box-shadow 0.3s, border-color 0.3s;
                }
                .card:hover {
                    border-color: #e8e8e8;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .card.roomy { padding: 2.5rem; }
                .card.plain { background: #fff; border-color: #e8e8e8; }
                .card.accent-edge { border-left: 4px solid #8b6f47; }
                .card.quote-bar {
                    border-left: 2px solid #1a1a1a;
                    border-radius: 0 0.5rem 0.5rem 0;
                    max-width: 48rem;
                }
                .card.quote-bar:hover { border-left-color: #8b6f47; }
                .card p, .card li { font-size: 0.875rem; color: #666; font-weight: 300; line-height: 1.7; }
                .card-title { font-size: 1rem; font-weight: 600; margin: 0 0 1rem 0; }
                .card-title.large { font-size: 1.25rem; font-weight: 500; }
                .column-title {
                    font-size: 1.125rem;
                    font-weight: 500;
                    border-bottom: 1px solid #e8e8e8;
                    padding-bottom: 0.75rem;
                }
                .dash-list, .bullet-list, .timeline, .step-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .dash-list li, .bullet-list li {
                    font-size: 0.95rem;
                    color: #666;
                    font-weight: 300;
                    margin-bottom: 1rem;
                }
                .dash-list li::before { content: '—'; margin-right: 1rem; color: rgba(139, 111, 71, 0.5); }
                .bullet-list li::before { content: '•'; margin-right: 0.75rem; color: #8b6f47; }
                .callout-center { margin-top: 4rem; text-align: center; max-width: 42rem; }
                .lead { font-size: 1.125rem; line-height: 1.7; color: #666; }
                .lead strong { color: #1a1a1a; }
                .source {
                    font-size: 0.6rem;
                    color: #bbb;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-weight: 500;
                }
                .stat { text-align: center; display: flex; flex-direction: column; align-items: center; justify-content: space-between; }
                .stat-number { font-size: 3.75rem; font-weight: 100; margin-bottom: 1rem; letter-spacing: -0.05em; }
                .stat-label { font-size: 0.875rem; color: #666; font-weight: 300; margin-bottom: 1.5rem; }
                .outcome { font-size: 1.875rem; font-weight: 300; margin-bottom: 1rem; }
                .accent { color: #8b6f47; }
                .divider { width: 3rem; height: 2px; background: #e8e8e8; margin: 0 auto 1rem auto; }
                .step-list { width: 100%; max-width: 48rem; }
                .step { display: flex; align-items: center; gap: 1.5rem; padding: 1.5rem; margin-bottom: 1rem; }
                .step strong, .path-step strong { display: block; font-weight: 400; font-size: 1.125rem; margin-bottom: 0.25rem; }
                .step span, .path-step span { font-size: 0.875rem; color: #888; font-weight: 300; }
                .step-badge {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    background: #1a1a1a;
                    color: #fff !important;
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: transform 0.3s, background 0.3s;
                }
                .step:hover .step-badge { background: #8b6f47; transform: scale(1.1); }
                .step-badge.small { width: 2rem; height: 2rem; font-weight: 700; }
                .step-badge.muted { background: #f3f4f6; color: #6b7280 !important; }
                .path-title { text-align: center; text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.75rem; font-weight: 500; margin: 0 0 1.5rem 0; }
                .path-step { display: flex; gap: 1rem; }
                .path-step strong { font-size: 0.875rem; font-weight: 600; }
                .table-card { padding: 0; overflow: hidden; border-color: #e8e8e8; }
                .table-card table { width: 100%; border-collapse: collapse; }
                .table-card th {
                    text-align: left;
                    padding: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    background: #f9fafb;
                    border-bottom: 1px solid #e8e8e8;
                    width: 25%;
                }
                .table-card th.value-column { width: 50%; }
                .table-card td { padding: 1.5rem; font-size: 0.875rem; color: #666; border-bottom: 1px solid #e8e8e8; }
                .table-card tr:last-child td { border-bottom: none; }
                .table-card td.area { color: #1a1a1a; font-weight: 500; }
                .table-card td.light { font-weight: 300; }
                .quote { text-align: center; font-size: 0.875rem; color: #999; font-style: italic; font-weight: 300; max-width: 42rem; margin: 0 auto; }
                .insight { font-size: 0.75rem; color: #666; line-height: 1.7; padding: 0.5rem 0.5rem 0 0.5rem; }
                .labelled strong { display: block; font-weight: 500; color: #1a1a1a; margin-bottom: 0.25rem; }
                .ruled { border-top: 1px solid #e8e8e8; border-bottom: 1px solid #e8e8e8; padding: 1.5rem 0; text-align: center; font-size: 0.875rem; color: #666; }
                .tinted { background: rgba(26, 26, 26, 0.05); padding: 1.5rem; border-radius: 0.5rem; text-align: center; font-size: 0.875rem; }
                .risk { background: #fff; padding: 1rem; border-radius: 0.25rem; border: 1px solid #f3f4f6; }
                .risk strong { display: block; font-size: 0.875rem; margin-bottom: 0.5rem; }
                .risk p { font-size: 0.75rem; margin: 0; }
                .timeline li { display: flex; justify-content: space-between; font-size: 0.875rem; color: #666; margin-bottom: 0.75rem; }
                .timeline li.total { border-top: 1px solid #e8e8e8; padding-top: 0.5rem; margin-top: 0.5rem; }
                .timeline .when { color: #1a1a1a; font-weight: 500; }
                .timeline .when.accent { color: #8b6f47; }
                .video-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    background: #000;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .video-frame video { width: 100%; height: 100%; object-fit: cover; }
                .video-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.5), transparent);
                    pointer-events: none;
                }
                .video-caption-title { color: #fff; font-size: 0.875rem; font-weight: 500; }
                .video-caption-sub { color: rgba(255, 255, 255, 0.7); font-size: 0.75rem; font-weight: 300; margin-top: 0.25rem; }
                @media (max-width: 768px) {
                    .slide { padding: 6rem 1.5rem; }
                    .slide-number { right: 1.5rem; }
                    .slide h1 { font-size: 3rem; }
                    .grid.two, .grid.three { grid-template-columns: 1fr; }
                }
            "#}
        </style>
    }
}
