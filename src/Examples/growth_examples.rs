pub fn growth_examples(task: usize) {
    //

    match task {
        0 => {
            // MONOD GROWTH RATE CURVE
            use crate::GrowthKinetics::monod::{MonodParameters, growth_rate};
            use nalgebra::DVector;

            let C = DVector::from_vec(vec![0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 50.0, 100.0]);
            let r = growth_rate(0.5, 2.0, &C);
            println!("C: {:?}", C.as_slice());
            println!("r: {:?}", r.as_slice());
            assert_eq!(r.len(), C.len());

            // the same model through the typed record
            let monod = MonodParameters::new(0.5, 2.0);
            println!("r(K) = {} (half of r_max)", monod.rate(monod.K));
        }
        1 => {
            // BATCH GROWTH SIMULATION WITH THE DEFAULT BDF SOLVER
            use crate::BatchReactor::BatchGrowthIVP::{BatchGrowthTask, GrowthParameters};
            use crate::Utils::logger::init_console_logger;
            use RustedSciThe::numerical::ODE_api2::SolverType;
            use log::LevelFilter;

            init_console_logger(LevelFilter::Info);

            let mut task = BatchGrowthTask::new(SolverType::BDF);
            task.set_problem_name("glucose batch");
            task.set_problem_description("E. coli on glucose, abundant substrate");
            task.set_parameters(GrowthParameters::new(1.0, 1.0, 0.1, 0.5, 0.1, 10.0));
            task.set_time_grid(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 10.0]);

            task.pretty_print_task();
            task.solve().unwrap();
            task.pretty_print_equations();
            task.debug_trajectory();

            let trajectory = task.get_trajectory().unwrap();
            for i in 0..trajectory.len() {
                println!(
                    "t = {:>6.2}  C_M = {:>10.6}  C_S = {:>10.6}",
                    trajectory.time[i], trajectory.C_M[i], trajectory.C_S[i]
                );
            }
        }
        2 => {
            // ONE-CALL FORM FOR POSITIONAL-ARRAY CALLERS (fitting layers)
            use crate::BatchReactor::BatchGrowthIVP::simulate_batch_growth;

            let par = [1.0, 1.0, 0.1, 0.5, 0.1, 10.0];
            let times = [0.0, 1.0, 2.0, 5.0, 10.0];
            let trajectory = simulate_batch_growth(&par, &times).unwrap();
            println!("time: {:?}", trajectory.time);
            println!("C_M:  {:?}", trajectory.C_M);
            println!("C_S:  {:?}", trajectory.C_S);
            assert_eq!(trajectory.C_M[0], par[4]);
            assert_eq!(trajectory.C_S[0], par[5]);
        }
        _ => {
            println!("no such example");
        }
    }
}
